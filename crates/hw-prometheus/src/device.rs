use hw_model::DeviceStatus;
use prometheus::{Gauge, Registry};

use crate::{error::MetricsError, gauge::register_gauge};

/// One exported device field: gauge name, help text and the field it mirrors.
#[derive(Debug, Clone, Copy)]
pub struct GaugeSpec {
    pub name: &'static str,
    pub help: &'static str,
    pub read: fn(&DeviceStatus) -> f64,
}

/// Device fields exported as gauges, copied verbatim.
pub const DEVICE_GAUGES: &[GaugeSpec] = &[
    GaugeSpec {
        name: "homewizard_wifi_strength_decibels",
        help: "strength of WIFI signal for homewizard in decibels",
        read: |s| s.wifi_strength,
    },
    GaugeSpec {
        name: "homewizard_active_power_watts",
        help: "current (total) usage of power measured in watts (W)",
        read: |s| s.active_power_w,
    },
    GaugeSpec {
        name: "homewizard_active_power_l1_watts",
        help: "current (L1) usage of power measured in watts (W)",
        read: |s| s.active_power_l1_w,
    },
    GaugeSpec {
        name: "homewizard_active_power_l2_watts",
        help: "current (L2) usage of power measured in watts (W)",
        read: |s| s.active_power_l2_w,
    },
    GaugeSpec {
        name: "homewizard_active_power_l3_watts",
        help: "current (L3) usage of power measured in watts (W)",
        read: |s| s.active_power_l3_w,
    },
    GaugeSpec {
        name: "homewizard_any_power_fail_count",
        help: "number of power failures measured by P1",
        read: |s| s.any_power_fail_count,
    },
    GaugeSpec {
        name: "homewizard_long_power_fail_count",
        help: "number of long power failures measured by P1",
        read: |s| s.long_power_fail_count,
    },
    GaugeSpec {
        name: "homewizard_gas_m3_total",
        help: "total usage of gas reported by the gas meter in m3",
        read: |s| s.total_gas_m3,
    },
];

/// The [`DEVICE_GAUGES`] set registered against one registry.
///
/// Gauges stay at zero until [`DeviceGauges::apply`] is called, so a failed
/// probe still exposes the full metric set.
pub struct DeviceGauges {
    gauges: Vec<(&'static GaugeSpec, Gauge)>,
}

impl DeviceGauges {
    pub fn register(registry: &Registry) -> Result<Self, MetricsError> {
        let gauges = DEVICE_GAUGES
            .iter()
            .map(|spec| register_gauge(registry, spec.name, spec.help).map(|g| (spec, g)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { gauges })
    }

    /// Copy every mapped field of `status` into its gauge.
    pub fn apply(&self, status: &DeviceStatus) {
        for (spec, gauge) in &self.gauges {
            gauge.set((spec.read)(status));
        }
    }

    #[cfg(test)]
    fn value(&self, name: &str) -> Option<f64> {
        self.gauges
            .iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, gauge)| gauge.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DeviceStatus {
        DeviceStatus {
            wifi_strength: -45.0,
            active_power_w: 1200.5,
            active_power_l1_w: 400.25,
            active_power_l2_w: 500.0,
            active_power_l3_w: 300.25,
            any_power_fail_count: 3.0,
            long_power_fail_count: 1.0,
            total_gas_m3: 2569.646,
            voltage_sag_l1_count: 99.0,
            ..Default::default()
        }
    }

    #[test]
    fn table_has_unique_names() {
        let mut names: Vec<_> = DEVICE_GAUGES.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEVICE_GAUGES.len());
        assert_eq!(DEVICE_GAUGES.len(), 8);
    }

    #[test]
    fn registers_all_gauges_at_zero() {
        let registry = Registry::new();
        let gauges = DeviceGauges::register(&registry).unwrap();

        assert_eq!(registry.gather().len(), DEVICE_GAUGES.len());
        for spec in DEVICE_GAUGES {
            assert_eq!(gauges.value(spec.name), Some(0.0), "{}", spec.name);
        }
    }

    #[test]
    fn apply_copies_fields_verbatim() {
        let registry = Registry::new();
        let gauges = DeviceGauges::register(&registry).unwrap();
        gauges.apply(&sample());

        assert_eq!(gauges.value("homewizard_wifi_strength_decibels"), Some(-45.0));
        assert_eq!(gauges.value("homewizard_active_power_watts"), Some(1200.5));
        assert_eq!(gauges.value("homewizard_active_power_l1_watts"), Some(400.25));
        assert_eq!(gauges.value("homewizard_active_power_l2_watts"), Some(500.0));
        assert_eq!(gauges.value("homewizard_active_power_l3_watts"), Some(300.25));
        assert_eq!(gauges.value("homewizard_any_power_fail_count"), Some(3.0));
        assert_eq!(gauges.value("homewizard_long_power_fail_count"), Some(1.0));
        assert_eq!(gauges.value("homewizard_gas_m3_total"), Some(2569.646));
    }

    #[test]
    fn unknown_name_has_no_value() {
        let registry = Registry::new();
        let gauges = DeviceGauges::register(&registry).unwrap();
        assert_eq!(gauges.value("homewizard_voltage_sag_l1_count"), None);
    }

    #[test]
    fn registries_are_independent() {
        let first = Registry::new();
        let second = Registry::new();
        let a = DeviceGauges::register(&first).unwrap();
        let b = DeviceGauges::register(&second).unwrap();

        a.apply(&sample());

        assert_eq!(a.value("homewizard_active_power_watts"), Some(1200.5));
        assert_eq!(b.value("homewizard_active_power_watts"), Some(0.0));
    }
}
