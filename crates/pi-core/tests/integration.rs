// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end attribute resolution.
//!
//! These tests drive the facades over fixture sources captured from a
//! Raspberry Pi 4 and a Pi 3, covering source fallback, derivations, and
//! boot-configuration handling without touching the real host.

use host_probe::{SourceProvider, StaticSource, Unavailable};
use pi_core::{
    query, CacheLevel, CacheSize, CoreConfig, CoreCount, HostPlatform, Pi, PiCore, Processor,
    RawSourceBundle, ReferenceCatalog, UnitMode,
};
use std::cell::Cell;
use std::sync::Arc;

// ── Fixtures ───────────────────────────────────────────────────

const PI4_LSCPU: &str = "Architecture:                    aarch64
CPU op-mode(s):                  32-bit, 64-bit
Byte Order:                      Little Endian
CPU(s):                          4
On-line CPU(s) list:             0-3
Vendor ID:                       ARM
Model name:                      Cortex-A72
Model:                           3
Thread(s) per core:              1
Core(s) per cluster:             4
Stepping:                        r0p3
CPU max MHz:                     1800.0000
CPU min MHz:                     600.0000
BogoMIPS:                        108.00
Flags:                           fp asimd evtstrm crc32 cpuid
L1d cache:                       128 KiB (4 instances)
L1i cache:                       192 KiB (4 instances)
L2 cache:                        1 MiB (1 instance)
";

const PI4_CPUINFO: &str = "processor\t: 0
BogoMIPS\t: 108.00
Features\t: fp asimd evtstrm crc32 cpuid
CPU implementer\t: 0x41
CPU architecture: 8
CPU variant\t: 0x0
CPU part\t: 0xd08
CPU revision\t: 3

Revision\t: c03114
Serial\t\t: 10000000a1b2c3d4
Model\t\t: Raspberry Pi 4 Model B Rev 1.4
";

const PI3_CPUINFO: &str = "processor\t: 0
model name\t: ARMv7 Processor rev 4 (v7l)
Model name: Cortex-A53
CPU MHz: 1200
CPU(s): 4
Features\t: half thumb fastmult vfp edsp neon vfpv3 tls vfpv4 idiva idivt vfpd32 lpae evtstrm crc32

Hardware\t: BCM2835
Revision\t: a02082
Serial\t\t: 00000000deadbeef
Model\t\t: Raspberry Pi 3 Model B Rev 1.2
";

const OVERCLOCKED_CONFIG: &str = "# http://rpf.io/configtxt
arm_freq=2000
over_voltage=4
force_turbo=1
";

const STOCK_CONFIG: &str = "# http://rpf.io/configtxt
#arm_freq=2000
#over_voltage=6
dtparam=audio=on
";

// ── Helpers ────────────────────────────────────────────────────

fn processor(bundle: RawSourceBundle) -> Processor {
    processor_with(bundle, CoreConfig::default())
}

fn processor_with(bundle: RawSourceBundle, config: CoreConfig) -> Processor {
    Processor::with_sources(
        bundle,
        Arc::new(ReferenceCatalog::bundled().unwrap()),
        Arc::new(config),
    )
}

fn raspbian() -> HostPlatform {
    HostPlatform {
        distribution: Some("raspbian".into()),
        virtual_machine: false,
    }
}

// ── Source fallback ────────────────────────────────────────────

#[test]
fn test_model_name_from_primary_source() {
    let bundle = RawSourceBundle::from_text(Some(PI4_LSCPU), Some(PI4_CPUINFO), None);
    assert_eq!(query("Model name:", &bundle), Some("Cortex-A72".to_string()));
}

#[test]
fn test_minimal_image_without_lscpu() {
    let cpu = processor(RawSourceBundle::from_text(None, Some(PI3_CPUINFO), None));
    assert_eq!(cpu.name().as_deref(), Some("Cortex-A53"));
    assert_eq!(cpu.max_clock_speed(UnitMode::Raw), Some(1200.0));
    assert_eq!(cpu.cores_count(CoreCount::Physical).as_deref(), Some("4"));
    // Logical count needs Thread(s) per core, which cpuinfo lacks.
    assert_eq!(cpu.cores_count(CoreCount::Logical), None);
    assert_eq!(cpu.architecture(), None);
    assert!(cpu.flags().contains(&"neon".to_string()));
}

#[test]
fn test_fallback_when_primary_lacks_field() {
    let bundle =
        RawSourceBundle::from_text(Some("Architecture: armv7l\n"), Some(PI3_CPUINFO), None);
    let cpu = processor(bundle);
    assert_eq!(cpu.architecture().as_deref(), Some("armv7l"));
    assert_eq!(cpu.name().as_deref(), Some("Cortex-A53"));
}

// ── Derivations ────────────────────────────────────────────────

#[test]
fn test_pi4_report() {
    let cpu = processor(RawSourceBundle::from_text(
        Some(PI4_LSCPU),
        Some(PI4_CPUINFO),
        Some(STOCK_CONFIG),
    ));

    assert_eq!(cpu.name().as_deref(), Some("Cortex-A72"));
    assert_eq!(cpu.architecture().as_deref(), Some("aarch64"));
    assert_eq!(cpu.stepping().as_deref(), Some("r0p3"));
    assert_eq!(cpu.cores_count(CoreCount::Physical).as_deref(), Some("4"));
    assert_eq!(cpu.cores_count(CoreCount::Logical).as_deref(), Some("4"));

    assert_eq!(cpu.max_clock_speed(UnitMode::Raw), Some(1800.0));
    assert_eq!(cpu.max_clock_speed(UnitMode::Aliased), Some(2.0));
    // Catalogued base clock wins over the derivation.
    assert_eq!(cpu.base_clock_speed(UnitMode::Raw), Some(1500.0));

    assert_eq!(
        cpu.l1d_cache_size(UnitMode::Aliased),
        Some(CacheSize::Text("128 KiB (4 instances)".into()))
    );
    assert_eq!(cpu.l1d_cache_size(UnitMode::Raw), Some(CacheSize::Bytes(0)));
    assert_eq!(cpu.l1i_cache_size(UnitMode::Raw), Some(CacheSize::Bytes(0)));
    assert_eq!(cpu.l2_cache_size(UnitMode::Raw), Some(CacheSize::Bytes(2048)));
    assert_eq!(cpu.l3_cache_size(UnitMode::Raw), None);

    assert!(!cpu.is_overclocked());
    assert!(!cpu.is_force_turbo());
    let catalogued = ReferenceCatalog::bundled()
        .unwrap()
        .lookup("Cortex-A72")
        .and_then(|r| r.voltage)
        .unwrap();
    assert!((cpu.voltage() - catalogued).abs() < f64::EPSILON);
    assert_eq!(cpu.release_date().as_deref(), Some("2019-06-24"));
    assert_eq!(cpu.flags(), vec!["fp", "asimd", "evtstrm", "crc32", "cpuid"]);
}

#[test]
fn test_unknown_model_derives_base_clock() {
    let cpu = processor(RawSourceBundle::from_text(
        Some("Model name: Prototype-X\nCPU MHz: 1600\n"),
        None,
        None,
    ));
    let base = cpu.base_clock_speed(UnitMode::Raw).unwrap();
    assert!((base - 1000.0).abs() < 1e-9);
    assert_eq!(cpu.release_date(), None);
    assert!((cpu.voltage() - 1.2).abs() < f64::EPSILON);
}

#[test]
fn test_configured_scaling_factor_and_default_voltage() {
    let config = CoreConfig {
        scaling_factor: 2.0,
        default_voltage: 1.35,
        ..Default::default()
    };
    let cpu = processor_with(
        RawSourceBundle::from_text(Some("Model name: Prototype-X\nCPU MHz: 1600\n"), None, None),
        config,
    );
    assert_eq!(cpu.base_clock_speed(UnitMode::Raw), Some(800.0));
    assert!((cpu.voltage() - 1.35).abs() < f64::EPSILON);
}

#[test]
fn test_overclocked_board() {
    let cpu = processor(RawSourceBundle::from_text(
        Some(PI4_LSCPU),
        Some(PI4_CPUINFO),
        Some(OVERCLOCKED_CONFIG),
    ));
    assert!(cpu.is_overclocked());
    assert!(cpu.is_force_turbo());
    assert!((cpu.voltage() - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_cache_level_labels_cover_all_levels() {
    let cpu = processor(RawSourceBundle::from_text(Some(PI4_LSCPU), None, None));
    let known: Vec<_> = CacheLevel::ALL
        .iter()
        .filter(|level| cpu.cache_size(**level, UnitMode::Aliased).is_some())
        .collect();
    assert_eq!(known.len(), 3);
}

// ── Board identity ─────────────────────────────────────────────

#[test]
fn test_board_identity() {
    let pi = Pi::with_sources(
        RawSourceBundle::from_text(Some(PI4_LSCPU), Some(PI4_CPUINFO), Some(STOCK_CONFIG)),
        raspbian(),
    );
    assert_eq!(pi.model().as_deref(), Some("Raspberry Pi 4 Model B Rev 1.4"));
    assert_eq!(pi.serial_number().as_deref(), Some("10000000a1b2c3d4"));
    assert!(pi.boot_config_present());
    assert_eq!(pi.platform(), &raspbian());
}

// ── Idempotence ────────────────────────────────────────────────

struct CountingSource {
    text: &'static str,
    calls: Cell<usize>,
}

impl SourceProvider for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn fetch(&self) -> Result<String, Unavailable> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.text.to_string())
    }
}

#[test]
fn test_repeated_queries_do_not_refetch() {
    let lscpu = CountingSource {
        text: PI4_LSCPU,
        calls: Cell::new(0),
    };
    let cpuinfo = CountingSource {
        text: PI4_CPUINFO,
        calls: Cell::new(0),
    };
    let bundle = RawSourceBundle::capture(&lscpu, &cpuinfo, &StaticSource::missing("config.txt"));
    let cpu = processor(bundle);

    let first = cpu.report(UnitMode::Raw);
    for _ in 0..5 {
        assert_eq!(cpu.report(UnitMode::Raw), first);
    }
    assert_eq!(lscpu.calls.get(), 1);
    assert_eq!(cpuinfo.calls.get(), 1);
}

// ── Session ────────────────────────────────────────────────────

#[test]
fn test_session_from_catalog_without_probe() {
    let core = PiCore::with_catalog(
        CoreConfig {
            system_info_command: vec![],
            cpuinfo: "/nonexistent/cpuinfo".into(),
            boot_config: vec!["/nonexistent/config.txt".into()],
            ..Default::default()
        },
        ReferenceCatalog::bundled().unwrap(),
        raspbian(),
    );
    let cpu = core.processor();
    assert_eq!(cpu.name(), None);
    assert!((cpu.voltage() - 1.2).abs() < f64::EPSILON);

    let pi = core.board();
    assert_eq!(pi.serial_number(), None);
    assert!(!pi.boot_config_present());
}
