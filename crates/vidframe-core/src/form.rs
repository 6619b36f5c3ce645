//! Field visibility for the host's properties panel
//!
//! All derived from `service` and the two toggles; the host recomputes them
//! whenever one of those inputs changes.

use crate::{EmbedConfig, Service};
use serde::{Deserialize, Serialize};

/// Width/height inputs apply to fixed-size embeds, which YouTube always is
pub fn show_dimensions(service: Service, dynamic_size: bool) -> bool {
    !service.supports_dynamic_size() || !dynamic_size
}

pub fn show_dynamic_size(service: Service) -> bool {
    service.supports_dynamic_size()
}

pub fn show_play_from_beginning(service: Service) -> bool {
    service.supports_start_time()
}

pub fn show_starting_time(service: Service, play_from_beginning: bool) -> bool {
    service.supports_start_time() && !play_from_beginning
}

/// Which panel inputs to display for a config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldVisibility {
    pub dynamic_size: bool,
    pub dimensions: bool,
    pub play_from_beginning: bool,
    pub starting_time: bool,
}

impl FieldVisibility {
    /// An unrecognized service hides every provider-specific field
    pub fn for_config(config: &EmbedConfig) -> Self {
        match config.service() {
            Ok(service) => Self {
                dynamic_size: show_dynamic_size(service),
                dimensions: show_dimensions(service, config.dynamic_size),
                play_from_beginning: show_play_from_beginning(service),
                starting_time: show_starting_time(service, config.play_from_beginning),
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert!(show_dimensions(Service::YouTube, true));
        assert!(show_dimensions(Service::YouTube, false));
        assert!(!show_dimensions(Service::Vimeo, true));
        assert!(show_dimensions(Service::Vimeo, false));
        assert!(!show_dimensions(Service::File, true));
    }

    #[test]
    fn test_starting_time() {
        assert!(show_starting_time(Service::Vimeo, false));
        assert!(!show_starting_time(Service::Vimeo, true));
        assert!(!show_starting_time(Service::Dailymotion, false));
    }

    #[test]
    fn test_for_config() {
        let config = EmbedConfig::new(Service::Dailymotion, "https://www.dailymotion.com/video/x1")
            .dynamic()
            .starting_at(3);
        assert_eq!(
            FieldVisibility::for_config(&config),
            FieldVisibility {
                dynamic_size: true,
                dimensions: false,
                play_from_beginning: false,
                starting_time: false,
            }
        );
    }

    #[test]
    fn test_unknown_service_hides_fields() {
        let mut config = EmbedConfig::default();
        config.service = "twitch".into();
        assert_eq!(FieldVisibility::for_config(&config), FieldVisibility::default());
    }
}
