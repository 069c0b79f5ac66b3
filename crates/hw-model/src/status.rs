use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot returned by a P1 meter.
///
/// The meter omits fields it does not measure (a single phase connection has
/// no L2/L3 values, a household without gas has no gas fields), so every
/// field falls back to its zero value, also when sent as `null`. Unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceStatus {
    #[serde(deserialize_with = "nullable")]
    pub wifi_ssid: String,
    /// Signal strength in dB.
    #[serde(deserialize_with = "nullable")]
    pub wifi_strength: f64,
    #[serde(deserialize_with = "nullable")]
    pub smr_version: f64,
    #[serde(deserialize_with = "nullable")]
    pub meter_model: String,
    #[serde(deserialize_with = "nullable")]
    pub unique_id: String,
    #[serde(deserialize_with = "nullable")]
    pub active_tariff: f64,

    #[serde(deserialize_with = "nullable")]
    pub total_power_import_kwh: f64,
    #[serde(deserialize_with = "nullable")]
    pub total_power_import_t1_kwh: f64,
    #[serde(deserialize_with = "nullable")]
    pub total_power_import_t2_kwh: f64,
    #[serde(deserialize_with = "nullable")]
    pub total_power_export_kwh: f64,
    #[serde(deserialize_with = "nullable")]
    pub total_power_export_t1_kwh: f64,
    #[serde(deserialize_with = "nullable")]
    pub total_power_export_t2_kwh: f64,

    #[serde(deserialize_with = "nullable")]
    pub active_power_w: f64,
    #[serde(deserialize_with = "nullable")]
    pub active_power_l1_w: f64,
    #[serde(deserialize_with = "nullable")]
    pub active_power_l2_w: f64,
    #[serde(deserialize_with = "nullable")]
    pub active_power_l3_w: f64,
    #[serde(deserialize_with = "nullable")]
    pub active_voltage_l1_v: f64,
    #[serde(deserialize_with = "nullable")]
    pub active_voltage_l2_v: f64,
    #[serde(deserialize_with = "nullable")]
    pub active_voltage_l3_v: f64,
    #[serde(deserialize_with = "nullable")]
    pub active_current_l1_a: f64,
    #[serde(deserialize_with = "nullable")]
    pub active_current_l2_a: f64,
    #[serde(deserialize_with = "nullable")]
    pub active_current_l3_a: f64,

    #[serde(deserialize_with = "nullable")]
    pub voltage_sag_l1_count: f64,
    #[serde(deserialize_with = "nullable")]
    pub voltage_sag_l2_count: f64,
    #[serde(deserialize_with = "nullable")]
    pub voltage_sag_l3_count: f64,
    #[serde(deserialize_with = "nullable")]
    pub voltage_swell_l1_count: f64,
    #[serde(deserialize_with = "nullable")]
    pub voltage_swell_l2_count: f64,
    #[serde(deserialize_with = "nullable")]
    pub voltage_swell_l3_count: f64,
    #[serde(deserialize_with = "nullable")]
    pub any_power_fail_count: f64,
    #[serde(deserialize_with = "nullable")]
    pub long_power_fail_count: f64,

    #[serde(deserialize_with = "nullable")]
    pub total_gas_m3: f64,
    /// Meter timestamp encoded as `YYMMDDhhmmss`.
    #[serde(deserialize_with = "nullable")]
    pub gas_timestamp: i64,
    #[serde(deserialize_with = "nullable")]
    pub gas_unique_id: String,

    /// Sub-meters attached over the P1 bus (water, heat, extra gas meters).
    #[serde(deserialize_with = "nullable")]
    pub external: Vec<ExternalReading>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalReading {
    #[serde(deserialize_with = "nullable")]
    pub unique_id: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: i64,
    #[serde(deserialize_with = "nullable")]
    pub value: f64,
    #[serde(deserialize_with = "nullable")]
    pub unit: String,
}

/// Decode `null` as the type's default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "wifi_ssid": "My Wi-Fi",
        "wifi_strength": 100,
        "smr_version": 50,
        "meter_model": "ISKRA 2M550T-101",
        "unique_id": "00112233445566778899AABBCCDDEEFF",
        "active_tariff": 2,
        "total_power_import_kwh": 13779.338,
        "total_power_import_t1_kwh": 10830.511,
        "total_power_import_t2_kwh": 2948.827,
        "total_power_export_kwh": 0,
        "total_power_export_t1_kwh": 0,
        "total_power_export_t2_kwh": 0,
        "active_power_w": -543,
        "active_power_l1_w": -676,
        "active_power_l2_w": 133,
        "active_power_l3_w": 0,
        "active_current_l1_a": -4,
        "active_current_l2_a": 2,
        "active_current_l3_a": 0,
        "voltage_sag_l1_count": 1,
        "voltage_sag_l2_count": 1,
        "voltage_sag_l3_count": 0,
        "voltage_swell_l1_count": 0,
        "voltage_swell_l2_count": 0,
        "voltage_swell_l3_count": 0,
        "any_power_fail_count": 4,
        "long_power_fail_count": 5,
        "total_gas_m3": 2569.646,
        "gas_timestamp": 210606140010,
        "gas_unique_id": "FFEEDDCCBBAA99887766554433221100",
        "external": [
            {
                "unique_id": "AABBCCDDEEFF",
                "type": "gas_meter",
                "timestamp": 230125220957,
                "value": 2569.646,
                "unit": "m3"
            },
            {
                "unique_id": "FFEEDDCCBBAA",
                "type": "water_meter",
                "timestamp": 230125220957,
                "value": 123.456,
                "unit": "m3"
            }
        ]
    }"#;

    #[test]
    fn decodes_full_document() {
        let status: DeviceStatus = serde_json::from_str(FULL).unwrap();

        assert_eq!(status.wifi_ssid, "My Wi-Fi");
        assert_eq!(status.wifi_strength, 100.0);
        assert_eq!(status.active_power_w, -543.0);
        assert_eq!(status.active_power_l2_w, 133.0);
        assert_eq!(status.any_power_fail_count, 4.0);
        assert_eq!(status.long_power_fail_count, 5.0);
        assert_eq!(status.total_gas_m3, 2569.646);
        assert_eq!(status.gas_timestamp, 210606140010);

        assert_eq!(status.external.len(), 2);
        assert_eq!(status.external[0].kind, "gas_meter");
        assert_eq!(status.external[1].kind, "water_meter");
        assert_eq!(status.external[1].value, 123.456);
        assert_eq!(status.external[1].unit, "m3");
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let status: DeviceStatus =
            serde_json::from_str(r#"{"wifi_strength": -45, "active_power_w": 1200.5}"#).unwrap();

        assert_eq!(status.wifi_strength, -45.0);
        assert_eq!(status.active_power_w, 1200.5);
        assert_eq!(status.active_power_l3_w, 0.0);
        assert_eq!(status.total_gas_m3, 0.0);
        assert!(status.meter_model.is_empty());
        assert!(status.external.is_empty());
    }

    #[test]
    fn null_fields_default_to_zero() {
        let status: DeviceStatus = serde_json::from_str(
            r#"{
                "wifi_strength": -45,
                "total_gas_m3": null,
                "gas_timestamp": null,
                "gas_unique_id": null,
                "external": null
            }"#,
        )
        .unwrap();

        assert_eq!(status.wifi_strength, -45.0);
        assert_eq!(status.total_gas_m3, 0.0);
        assert_eq!(status.gas_timestamp, 0);
        assert!(status.gas_unique_id.is_empty());
        assert!(status.external.is_empty());
    }

    #[test]
    fn null_external_fields_default_to_zero() {
        let status: DeviceStatus = serde_json::from_str(
            r#"{"external": [{"unique_id": null, "type": "water_meter", "value": null}]}"#,
        )
        .unwrap();

        assert_eq!(status.external.len(), 1);
        assert!(status.external[0].unique_id.is_empty());
        assert_eq!(status.external[0].kind, "water_meter");
        assert_eq!(status.external[0].value, 0.0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let status: DeviceStatus =
            serde_json::from_str(r#"{"montly_power_peak_w": 1111.0, "wifi_strength": 80}"#)
                .unwrap();
        assert_eq!(status.wifi_strength, 80.0);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(serde_json::from_str::<DeviceStatus>(r#"{"active_power_w": "lots"}"#).is_err());
        assert!(serde_json::from_str::<DeviceStatus>(r#"{"gas_timestamp": 1.5}"#).is_err());
        assert!(serde_json::from_str::<DeviceStatus>("42").is_err());
    }

    #[test]
    fn external_type_uses_wire_name() {
        let reading = ExternalReading {
            kind: "heat_meter".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["type"], "heat_meter");
        assert!(json.get("kind").is_none());
    }
}
