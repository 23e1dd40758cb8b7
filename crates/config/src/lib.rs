//! swap-quote configuration
//!
//! Settings structures, file/environment loading and startup logging.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from, ConfigLoadError, DEFAULT_CONFIG_PATH};
pub use settings::{
	AggregatorSettings, ConfigValidationError, GasLimitSettings, LogFormat, LoggingSettings,
	RpcSettings, Settings,
};
pub use startup_logger::{log_service_info, log_settings_summary};
