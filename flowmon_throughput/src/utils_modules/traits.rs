use crate::common::*;

/* FlowMonitor XML 노드 → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromXmlNode
where
    Self: Sized,
{
    fn from_xml_node(node: &Node) -> Result<Self, anyhow::Error>;
}

#[doc = "필수 속성을 읽어오고, 없으면 어떤 요소의 어떤 속성이 빠졌는지 오류로 반환"]
pub fn required_attribute<'a>(node: &Node<'a, '_>, name: &str) -> anyhow::Result<&'a str> {
    node.attribute(name).ok_or_else(|| {
        anyhow!(
            "[required_attribute] <{}> at byte {} is missing attribute '{}'",
            node.tag_name().name(),
            node.range().start,
            name
        )
    })
}
