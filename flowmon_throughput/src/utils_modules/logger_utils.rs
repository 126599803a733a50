use crate::common::*;

use crate::model::configs::{log_config::*, total_config::*};

#[doc = "로그 한 줄의 포맷: [시각] [레벨] T[스레드] 메시지"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        &record.args()
    )
}

#[doc = r#"
    전역 로거를 설정하는 함수.

    `[log]` 설정의 디렉토리에 파일로 기록하며, 하루 단위로 로테이션하고
    `keep_files` 개수만큼만 보관한다. WARN 이상은 stderr 로도 복제된다.
    반환된 핸들은 프로그램 종료 시점까지 유지해야 버퍼가 모두 기록된다.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_config: &LogConfig = get_log_config_info();

    let logger: Logger = match Logger::try_with_str(log_config.level()) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!(
                "[set_global_logger] Invalid log level '{}', falling back to 'info': {:?}",
                log_config.level(),
                e
            );
            Logger::try_with_str("info").unwrap_or_else(|e| panic!("{:?}", e))
        }
    };

    logger
        .log_to_file(
            FileSpec::default()
                .directory(log_config.directory())
                .basename("flowmon_throughput"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(*log_config.keep_files()),
        )
        .format_for_files(custom_format)
        .duplicate_to_stderr(Duplicate::Warn)
        .start()
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}
