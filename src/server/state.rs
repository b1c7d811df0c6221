//! Server state and configuration.

use std::path::PathBuf;
use std::sync::Arc;

use crate::ir::{Encoder, EncoderConfig};
use crate::transport::{DeviceDelivery, Delivery};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8083")
    pub listen_addr: String,
    /// Directory printer identifiers are resolved in. Identifiers are bare
    /// device names; paths outside this directory are never opened.
    pub device_dir: PathBuf,
    /// Encoder settings shared by every request
    pub encoder: EncoderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8083".to_string(),
            device_dir: PathBuf::from("/dev/usb"),
            encoder: EncoderConfig::default(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub encoder: Encoder,
    pub delivery: Arc<dyn Delivery>,
}

impl AppState {
    /// State that delivers to device files inside the configured directory.
    pub fn new(config: ServerConfig) -> Self {
        let delivery = Arc::new(DeviceDelivery::with_device_dir(&config.device_dir));
        Self::with_delivery(config, delivery)
    }

    /// State with a caller-supplied delivery backend.
    pub fn with_delivery(config: ServerConfig, delivery: Arc<dyn Delivery>) -> Self {
        Self {
            encoder: Encoder::new(config.encoder),
            config,
            delivery,
        }
    }
}
