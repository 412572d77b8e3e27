//! Domain constants

/// Default REST API base path.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default on-disk location of the session document.
pub const DEFAULT_SESSION_PATH: &str = ".awsomeshop/session.json";

/// Language used when no preference is stored and detection fails.
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Country codes mapped to the Chinese locale during language detection.
pub const CHINESE_REGIONS: [&str; 5] = ["CN", "HK", "MO", "TW", "SG"];

/// Default page size for the points transaction history.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
