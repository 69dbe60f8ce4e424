// Copyright 2020 TiKV Project Authors. Licensed under Apache-2.0.

use std::fmt;

use rand::RngCore;
use rand::rngs::OsRng;

/// A one-shot snapshot of the runtime facts that matter when reading
/// benchmark numbers: platform, parallelism, memory ceiling, and what the
/// secure-random subsystem looks like from inside this process.
///
/// Every field is captured best-effort; a failed lookup degrades to a
/// placeholder and never aborts the run.
#[derive(Clone, Debug)]
pub struct EnvReport {
    /// Operating system and architecture, e.g. `linux x86_64`.
    pub platform: String,
    /// Processors available to this process.
    pub processors: Option<usize>,
    /// Total system memory in MiB.
    pub max_memory_mib: Option<u64>,
    /// Where the operating-system entropy used for seeding comes from.
    pub rng_provider: Option<&'static str>,
    /// The algorithm behind the in-process thread-local rng.
    pub rng_algorithm: &'static str,
    /// Whether one rng instance may be used from several threads.
    pub rng_thread_safe: bool,
}

impl EnvReport {
    /// Captures a snapshot of the current process environment.
    pub fn capture() -> Self {
        EnvReport {
            platform: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
            processors: num_processors(),
            max_memory_mib: total_memory_mib(),
            rng_provider: probe_os_entropy(),
            rng_algorithm: "ChaCha12 (rand::ThreadRng, reseeding from OsRng)",
            // `ThreadRng` is neither `Send` nor `Sync`
            rng_thread_safe: false,
        }
    }
}

impl fmt::Display for EnvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "platform: {}", self.platform)?;
        match self.processors {
            Some(n) => writeln!(f, "available processors: {n}")?,
            None => writeln!(f, "available processors: unknown")?,
        }
        match self.max_memory_mib {
            Some(mib) => writeln!(f, "max memory: {mib} MiB")?,
            None => writeln!(f, "max memory: unknown")?,
        }
        writeln!(
            f,
            "secure-random provider: {}",
            self.rng_provider.unwrap_or("unknown")
        )?;
        writeln!(f, "secure-random algorithm: {}", self.rng_algorithm)?;
        write!(f, "secure-random thread-safe: {}", self.rng_thread_safe)
    }
}

/// Prints the environment snapshot to stdout.
///
/// Call once from the harness entry point, before any measurement starts.
pub fn print_environment() {
    println!("{}", EnvReport::capture());
}

fn num_processors() -> Option<usize> {
    match std::thread::available_parallelism() {
        Ok(n) => Some(n.get()),
        Err(err) => {
            log::warn!("failed to read available parallelism: {err}");
            None
        }
    }
}

/// Total system memory from `/proc/meminfo`, in MiB. Linux only.
fn total_memory_mib() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let meminfo = match std::fs::read_to_string("/proc/meminfo") {
            Ok(content) => content,
            Err(err) => {
                log::warn!("failed to read /proc/meminfo: {err}");
                return None;
            }
        };

        meminfo
            .lines()
            .find(|l| l.starts_with("MemTotal"))
            .and_then(|l| l.split_whitespace().nth(1))
            .and_then(|kb| kb.parse::<u64>().ok())
            .map(|kb| kb / 1024)
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Confirms the operating-system entropy source actually yields bytes.
fn probe_os_entropy() -> Option<&'static str> {
    let mut buf = [0u8; 16];
    match OsRng.try_fill_bytes(&mut buf) {
        Ok(()) => Some("getrandom (operating system)"),
        Err(err) => {
            log::warn!("operating-system entropy source unavailable: {err}");
            None
        }
    }
}
