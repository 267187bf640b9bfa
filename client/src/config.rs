use common::constants::{ADVANCE_INTERVAL_ENV, DEFAULT_ADVANCE_INTERVAL_SECS};
use common::progress::ProgressError;
use common::types::order_status::OrderStatusId;
use common::types::stage::StageSequence;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid initial status: {0}")]
    Status(#[from] ProgressError),
    #[error("cannot read stage file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid stage file {path}: {source}")]
    Stages {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("ORDER_ADVANCE_SECS must be a whole number of seconds, got {0:?}")]
    Interval(String),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub order_id: String,
    pub initial_status: OrderStatusId,
    pub stages: StageSequence,
    /// `None` when `ORDER_ADVANCE_SECS=0`: the order never advances on its own.
    pub advance_interval: Option<Duration>,
}

impl ClientConfig {
    /// Builds the configuration from `client [order_id] [initial_status] [stages.json]`.
    ///
    /// `args` excludes the program name. A missing order id is generated.
    pub fn from_args(args: &[String], advance_secs: Option<String>) -> Result<Self, ConfigError> {
        let order_id = args
            .first()
            .cloned()
            .unwrap_or_else(|| format!("FF{}", uuid::Uuid::new_v4().simple()));

        let stages = match args.get(2) {
            Some(path) => load_stages(Path::new(path))?,
            None => StageSequence::default(),
        };

        let initial_status = match args.get(1) {
            Some(raw) => raw.parse()?,
            None => stages
                .initial()
                .map(|stage| stage.id)
                .unwrap_or(OrderStatusId::OrderPlaced),
        };

        stages.classify(initial_status)?;

        let advance_interval = match advance_secs {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Interval(raw.clone()))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => Some(Duration::from_secs(DEFAULT_ADVANCE_INTERVAL_SECS)),
        };

        Ok(ClientConfig {
            order_id,
            initial_status,
            stages,
            advance_interval,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(&args, std::env::var(ADVANCE_INTERVAL_ENV).ok())
    }
}

pub fn load_stages(path: &Path) -> Result<StageSequence, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Stages {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let config = ClientConfig::from_args(&[], None).unwrap();
        assert!(config.order_id.starts_with("FF"));
        assert_eq!(config.initial_status, OrderStatusId::OrderPlaced);
        assert_eq!(config.stages, StageSequence::default());
        assert_eq!(
            config.advance_interval,
            Some(Duration::from_secs(DEFAULT_ADVANCE_INTERVAL_SECS))
        );
    }

    #[test]
    fn reads_order_id_and_status() {
        let config =
            ClientConfig::from_args(&args(&["FF123456789", "OUT_FOR_DELIVERY"]), None).unwrap();
        assert_eq!(config.order_id, "FF123456789");
        assert_eq!(config.initial_status, OrderStatusId::OutForDelivery);
    }

    #[test]
    fn unknown_status_is_a_config_error() {
        let err = ClientConfig::from_args(&args(&["FF1", "UNKNOWN_ID"]), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Status(ProgressError::UnknownStatus(ref raw)) if raw == "UNKNOWN_ID"
        ));
    }

    #[test]
    fn zero_interval_disables_auto_advance() {
        let config = ClientConfig::from_args(&[], Some("0".to_string())).unwrap();
        assert_eq!(config.advance_interval, None);
        let err = ClientConfig::from_args(&[], Some("soon".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Interval(_)));
    }

    #[test]
    fn loads_custom_stage_file() {
        let path = std::env::temp_dir().join(format!("stages-{}.json", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"id": "PREPARING", "label": "Cooking", "icon": "chef_hat"}},
                {{"id": "DELIVERED", "label": "Done", "icon": "package_check"}}]"#
        )
        .unwrap();

        let config =
            ClientConfig::from_args(&args(&["FF1", "DELIVERED", path.to_str().unwrap()]), None)
                .unwrap();
        assert_eq!(config.stages.len(), 2);
        assert_eq!(config.initial_status, OrderStatusId::Delivered);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn status_missing_from_stage_file_is_a_config_error() {
        let path = std::env::temp_dir().join(format!("stages-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"id": "DELIVERED", "label": "Done", "icon": "package_check"}]"#,
        )
        .unwrap();

        let result =
            ClientConfig::from_args(&args(&["FF3", "PREPARING", path.to_str().unwrap()]), None);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ConfigError::Status(ProgressError::UnknownStatus(ref raw))) if raw == "PREPARING"
        ));
    }

    #[test]
    fn empty_stage_file_is_a_config_error() {
        let path = std::env::temp_dir().join(format!("stages-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[]").unwrap();

        let result =
            ClientConfig::from_args(&args(&["FF4", "ORDER_PLACED", path.to_str().unwrap()]), None);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ConfigError::Status(ProgressError::EmptySequence))
        ));
    }

    #[test]
    fn missing_stage_file_is_reported() {
        let err = load_stages(Path::new("/nonexistent/stages.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
