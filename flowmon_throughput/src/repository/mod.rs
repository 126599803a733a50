pub mod report_repository_impl;
