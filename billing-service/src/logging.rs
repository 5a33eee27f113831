use billing_shared::{iso_timestamp, now_utc};
use tracing_subscriber::{
    fmt::{format::Writer, time::FormatTime},
    EnvFilter,
};

// 日志时间格式：[2024-05-01T12:00:00.000000Z]
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketedUtc;

impl FormatTime for BracketedUtc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "[{}]", iso_timestamp(&now_utc()))
    }
}

// 初始化日志：每行格式为 "[时间戳] 消息"，输出到 stdout
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(BracketedUtc)
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stdout)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_bracketed_utc() {
        let mut buf = String::new();
        BracketedUtc.format_time(&mut Writer::new(&mut buf)).unwrap();

        // [2024-05-01T12:00:00.000000Z]
        assert!(buf.starts_with('['));
        assert!(buf.ends_with("Z]"));
        assert_eq!(buf.len(), 29);
        assert_eq!(buf.as_bytes()[11], b'T');
    }
}
