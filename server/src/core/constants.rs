// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "CrimeDesk";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "crimedesk.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "CRIMEDESK_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "CRIMEDESK_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "CRIMEDESK_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "CRIMEDESK_LOG";

// =============================================================================
// Environment Variables - Database
// =============================================================================

/// Environment variable for the SQLite database path
pub const ENV_DB: &str = "CRIMEDESK_DB";

// =============================================================================
// Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8001;

/// Default log filter when neither env var is set
pub const DEFAULT_LOG_FILTER: &str = "info,crimedesk=info";

/// Default SQLite database path, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "db/stpaul_crime.sqlite3";

/// Default pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default SQLite busy timeout
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
