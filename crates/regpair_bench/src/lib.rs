use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regpair::{OverlayRegisters, PairMap, ProxyRegisters, Reg16, Reg8, RegisterFile};
use typed_builder::TypedBuilder;

pub const DEFAULT_ITERATIONS: u64 = 1_000_000;
pub const DEFAULT_SEED: u64 = 0x8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// read A, read SP, add
    APlusSp,
    /// read F, read SP, add
    FPlusSp,
    StoreF,
    StoreA,
    /// Seeded mix of 8- and 16-bit reads and writes over every register.
    RandomOps,
}

impl Workload {
    pub const ALL: [Workload; 5] = [
        Workload::APlusSp,
        Workload::FPlusSp,
        Workload::StoreF,
        Workload::StoreA,
        Workload::RandomOps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Workload::APlusSp => "a_plus_sp",
            Workload::FPlusSp => "f_plus_sp",
            Workload::StoreF => "store_f",
            Workload::StoreA => "store_a",
            Workload::RandomOps => "random_ops",
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct BenchConfig {
    #[builder(default = DEFAULT_ITERATIONS)]
    pub iterations: u64,
    #[builder(default = DEFAULT_SEED)]
    pub seed: u64,
    #[builder(default = Workload::ALL.to_vec())]
    pub workloads: Vec<Workload>,
}

/// Builds a config from positional arguments: `[ITERATIONS] [SEED]`.
///
/// The seed may be decimal or `0x`-prefixed hex.
pub fn config_from_args<I>(args: I) -> Result<BenchConfig>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let iterations = match args.next() {
        Some(s) => s
            .replace('_', "")
            .parse::<u64>()
            .with_context(|| format!("invalid iteration count '{}'", s))?,
        None => DEFAULT_ITERATIONS,
    };

    let seed = match args.next() {
        Some(s) => parse_seed(&s).with_context(|| format!("invalid seed '{}'", s))?,
        None => DEFAULT_SEED,
    };

    if let Some(extra) = args.next() {
        bail!("unexpected argument '{}'. Usage: regpair_bench [ITERATIONS] [SEED]", extra);
    }

    Ok(BenchConfig::builder()
        .iterations(iterations)
        .seed(seed)
        .build())
}

fn parse_seed(s: &str) -> Result<u64> {
    let seed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16)?,
        None => s.parse::<u64>()?,
    };
    Ok(seed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Read8(Reg8),
    Write8(Reg8, u8),
    Read16(Reg16),
    Write16(Reg16, u16),
}

impl Op {
    fn random(rng: &mut StdRng) -> Op {
        let reg8 = Reg8::ALL[rng.gen_range(0..Reg8::COUNT)];
        let reg16 = Reg16::ALL[rng.gen_range(0..Reg16::COUNT)];
        match rng.gen_range(0..4) {
            0 => Op::Read8(reg8),
            1 => Op::Write8(reg8, rng.gen()),
            2 => Op::Read16(reg16),
            _ => Op::Write16(reg16, rng.gen()),
        }
    }

    /// Runs the op and returns the value read, or 0 for a write.
    #[inline]
    fn apply(self, regs: &mut impl RegisterFile) -> u64 {
        match self {
            Op::Read8(r) => regs.read8(r) as u64,
            Op::Write8(r, v) => {
                regs.write8(r, v);
                0
            }
            Op::Read16(p) => regs.read16(p) as u64,
            Op::Write16(p, v) => {
                regs.write16(p, v);
                0
            }
        }
    }
}

/// What one register file variant produced for one workload.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub checksum: u64,
    pub snapshot: PairMap<u16>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub workload: Workload,
    pub proxy: Outcome,
    pub overlay: Outcome,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} checksum={:016X} proxy={:.3?} overlay={:.3?}",
            self.workload.name(),
            self.proxy.checksum,
            self.proxy.elapsed,
            self.overlay.elapsed
        )
    }
}

// Non-zero everywhere so that reads of any register contribute to the
// checksum.
fn initial_state() -> PairMap<u16> {
    PairMap::new([0x0102, 0x0304, 0x0506, 0x12F0, 0xFFFE, 0x0100])
}

fn run_variant<R: RegisterFile + Default>(workload: Workload, config: &BenchConfig) -> Outcome {
    let mut regs = R::default();
    regs.restore(&initial_state());
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut checksum = 0u64;

    let start = Instant::now();
    for i in 0..config.iterations {
        let value = match workload {
            Workload::APlusSp => {
                let regs = black_box(&regs);
                regs.read8(Reg8::A) as u64 + regs.read16(Reg16::SP) as u64
            }
            Workload::FPlusSp => {
                let regs = black_box(&regs);
                regs.read8(Reg8::F) as u64 + regs.read16(Reg16::SP) as u64
            }
            Workload::StoreF => {
                regs.write8(Reg8::F, black_box(i as u8));
                regs.read16(Reg16::AF) as u64
            }
            Workload::StoreA => {
                regs.write8(Reg8::A, black_box(i as u8));
                regs.read16(Reg16::AF) as u64
            }
            Workload::RandomOps => Op::random(&mut rng).apply(&mut regs),
        };
        checksum = checksum.wrapping_mul(31).wrapping_add(value);
    }
    let elapsed = start.elapsed();

    Outcome {
        checksum,
        snapshot: regs.snapshot(),
        elapsed,
    }
}

/// Runs every configured workload against both variants and fails on the
/// first one where they disagree.
pub fn run(config: &BenchConfig) -> Result<Vec<Report>> {
    log::info!(
        "Running {} workload(s), {} iterations each, seed 0x{:X}",
        config.workloads.len(),
        config.iterations,
        config.seed
    );

    let mut reports = Vec::with_capacity(config.workloads.len());
    for &workload in &config.workloads {
        let proxy = run_variant::<ProxyRegisters>(workload, config);
        let overlay = run_variant::<OverlayRegisters>(workload, config);

        log::debug!(
            "{}: proxy {:?} in {:?}, overlay {:?} in {:?}",
            workload,
            proxy.checksum,
            proxy.elapsed,
            overlay.checksum,
            overlay.elapsed
        );

        if proxy.checksum != overlay.checksum {
            bail!(
                "{}: checksums diverged (proxy 0x{:016X}, overlay 0x{:016X})",
                workload,
                proxy.checksum,
                overlay.checksum
            );
        }
        if proxy.snapshot != overlay.snapshot {
            bail!(
                "{}: final registers diverged (proxy {}, overlay {})",
                workload,
                ProxyRegisters::from_pairs(proxy.snapshot),
                ProxyRegisters::from_pairs(overlay.snapshot)
            );
        }

        let report = Report {
            workload,
            proxy,
            overlay,
        };
        log::info!("{}", report);
        reports.push(report);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let config = config_from_args(args(&[])).unwrap();
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.workloads, Workload::ALL.to_vec());
    }

    #[test]
    fn positional_iterations_and_seed() {
        let config = config_from_args(args(&["10_000", "0xBEEF"])).unwrap();
        assert_eq!(config.iterations, 10_000);
        assert_eq!(config.seed, 0xBEEF);

        let config = config_from_args(args(&["5", "42"])).unwrap();
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn bad_arguments_are_reported() {
        let err = config_from_args(args(&["lots"])).unwrap_err();
        assert!(err.to_string().contains("invalid iteration count 'lots'"));

        let err = config_from_args(args(&["1", "0xZZ"])).unwrap_err();
        assert!(err.to_string().contains("invalid seed '0xZZ'"));

        assert!(config_from_args(args(&["1", "2", "3"])).is_err());
    }

    #[test]
    fn every_workload_agrees_across_variants() {
        let config = BenchConfig::builder().iterations(2_000).seed(7).build();
        let reports = run(&config).unwrap();

        assert_eq!(reports.len(), Workload::ALL.len());
        for report in &reports {
            assert_eq!(report.proxy.checksum, report.overlay.checksum);
            assert_eq!(report.proxy.snapshot, report.overlay.snapshot);
        }
    }

    #[test]
    fn read_workloads_leave_registers_alone() {
        let config = BenchConfig::builder()
            .iterations(100)
            .workloads(vec![Workload::APlusSp, Workload::FPlusSp])
            .build();
        let reports = run(&config).unwrap();

        for report in &reports {
            assert_eq!(report.proxy.snapshot, initial_state());
        }
        // A = 0x12, SP = 0xFFFE; a single iteration checksum is just the sum.
        let one = BenchConfig::builder()
            .iterations(1)
            .workloads(vec![Workload::APlusSp])
            .build();
        assert_eq!(run(&one).unwrap()[0].proxy.checksum, 0x12 + 0xFFFE);
    }

    #[test]
    fn store_workloads_only_change_their_byte() {
        let config = BenchConfig::builder()
            .iterations(0x101)
            .workloads(vec![Workload::StoreF, Workload::StoreA])
            .build();
        let reports = run(&config).unwrap();

        let start = initial_state();
        let store_f = &reports[0].overlay.snapshot;
        assert_eq!(store_f[Reg16::AF], 0x1200);
        let store_a = &reports[1].overlay.snapshot;
        assert_eq!(store_a[Reg16::AF], 0x00F0);
        for pair in [Reg16::BC, Reg16::DE, Reg16::HL, Reg16::SP, Reg16::PC] {
            assert_eq!(store_f[pair], start[pair]);
            assert_eq!(store_a[pair], start[pair]);
        }
    }
}
