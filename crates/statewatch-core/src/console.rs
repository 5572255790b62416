//! AWS console deep links.

/// Base URL of the S3 console's object view.
pub const S3_CONSOLE_OBJECT_URL: &str = "https://s3.console.aws.amazon.com/s3/object";

/// Browsable console URL for one object. The key is embedded as-is — no
/// percent-encoding — so consumers must not assume an escaped query string.
pub fn console_object_url(bucket: &str, region: &str, key: &str) -> String {
    format!("{S3_CONSOLE_OBJECT_URL}/{bucket}?region={region}&prefix={key}")
}
