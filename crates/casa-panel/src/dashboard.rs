//! Dashboard view model
//!
//! One section per device, one card per entity, cards chosen by the
//! dispatcher. Control requests built by cards funnel through [`send`],
//! which forwards them to the device store and turns rejections into alerts.
//!
//! [`send`]: DashboardModel::send

use std::sync::Arc;

use casa_cards::{
    card_for, BinaryToggleCard, CardKind, ClimateCard, ControlRequest, LightCard, MotorCard,
    SingleValueCard, TempHumidityCard, ToggleCard,
};
use casa_core::{display_name, Device, Entity};
use casa_stores::DeviceStore;
use tracing::{debug, warn};

use crate::alert::AlertCenter;

/// A card instantiated for one entity
#[derive(Debug, Clone, PartialEq)]
pub enum EntityCard {
    TempHumidity(TempHumidityCard),
    Climate(ClimateCard),
    SingleValue(SingleValueCard),
    BinaryToggle(BinaryToggleCard),
    Light(LightCard),
    Motor(MotorCard),
    Toggle(ToggleCard),
    /// Read-only fallback; reuses the single-value layout
    Sensor(SingleValueCard),
}

/// Build the card the dispatcher picked for this entity
pub fn build_card(entity: &Entity, device_online: bool) -> EntityCard {
    match card_for(entity) {
        CardKind::TempHumidity => EntityCard::TempHumidity(TempHumidityCard::from_entity(entity)),
        CardKind::Climate => EntityCard::Climate(ClimateCard::from_entity(entity)),
        CardKind::SingleValue => EntityCard::SingleValue(SingleValueCard::from_entity(entity)),
        CardKind::BinaryToggle => {
            EntityCard::BinaryToggle(BinaryToggleCard::from_entity(entity, device_online))
        }
        CardKind::Light => EntityCard::Light(LightCard::from_entity(entity, device_online)),
        CardKind::Motor => EntityCard::Motor(MotorCard::from_entity(entity, device_online)),
        CardKind::Toggle => EntityCard::Toggle(ToggleCard::from_entity(entity, device_online)),
        CardKind::Sensor => EntityCard::Sensor(SingleValueCard::from_entity(entity)),
    }
}

/// One device and its rendered cards
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSection {
    pub device_id: String,
    pub title: String,
    pub online: bool,
    pub cards: Vec<EntityCard>,
}

impl DeviceSection {
    fn from_device(device: &Device) -> Self {
        Self {
            device_id: device.id.clone(),
            title: display_name(&device.name),
            online: device.online,
            cards: device
                .entities
                .iter()
                .map(|entity| build_card(entity, device.online))
                .collect(),
        }
    }
}

/// The main screen: every device with its entity cards
pub struct DashboardModel {
    devices: Arc<dyn DeviceStore>,
    pub alerts: AlertCenter,
}

impl DashboardModel {
    pub fn new(devices: Arc<dyn DeviceStore>) -> Self {
        Self {
            devices,
            alerts: AlertCenter::new(),
        }
    }

    /// Fresh snapshot of every device section
    ///
    /// A store failure queues an alert and renders an empty dashboard; the
    /// user retries by refreshing.
    pub async fn sections(&mut self) -> Vec<DeviceSection> {
        match self.devices.devices().await {
            Ok(devices) => devices.iter().map(DeviceSection::from_device).collect(),
            Err(err) => {
                warn!(%err, "Device snapshot failed");
                self.alerts
                    .error("Connection Error", "Failed to load devices");
                Vec::new()
            }
        }
    }

    /// Forward a card's control request to the device store
    pub async fn send(&mut self, request: ControlRequest) {
        debug!(entity_id = %request.entity_id, "Forwarding control request");
        if let Err(err) = self
            .devices
            .control(&request.entity_id, request.patch)
            .await
        {
            warn!(%err, "Control request rejected");
            self.alerts
                .error("Control Failed", "The device did not accept the change");
        }
    }
}
