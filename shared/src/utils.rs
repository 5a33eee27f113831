use chrono::{DateTime, SecondsFormat, Utc};

// 时间工具函数
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

// ISO-8601 UTC 时间戳（微秒精度），如 2024-05-01T12:00:00.000000Z
pub fn iso_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
