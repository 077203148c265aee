//! Process memory and CPU figures read from `/proc/self`.
//!
//! Every figure is optional; on platforms without procfs all of them are `None`.

/// Memory and CPU usage of the running process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    pub rss_bytes: Option<u64>,
    pub virtual_bytes: Option<u64>,
    pub user_ticks: Option<u64>,
    pub system_ticks: Option<u64>,
}

impl ProcessStats {
    pub async fn read() -> Self {
        let status = tokio::fs::read_to_string("/proc/self/status").await;
        let stat = tokio::fs::read_to_string("/proc/self/stat").await;

        let (rss_bytes, virtual_bytes) = status.as_deref().map(parse_status).unwrap_or_default();
        let (user_ticks, system_ticks) = stat.as_deref().map(parse_stat).unwrap_or_default();

        Self {
            rss_bytes,
            virtual_bytes,
            user_ticks,
            system_ticks,
        }
    }
}

/// Extracts `VmRSS` and `VmSize` from `/proc/self/status`, converted to bytes.
fn parse_status(status: &str) -> (Option<u64>, Option<u64>) {
    let kilobytes = |key: &str| {
        status
            .lines()
            .find_map(|line| line.strip_prefix(key))
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|kb| kb.parse::<u64>().ok())
            .map(|kb| kb * 1024)
    };

    (kilobytes("VmRSS:"), kilobytes("VmSize:"))
}

/// Extracts `utime` and `stime` from `/proc/self/stat`.
///
/// The command name in field 2 may contain spaces, so fields are counted from the
/// closing parenthesis. `utime` and `stime` are fields 14 and 15.
fn parse_stat(stat: &str) -> (Option<u64>, Option<u64>) {
    let Some((_, rest)) = stat.rsplit_once(')') else {
        return (None, None);
    };
    let fields: Vec<&str> = rest.split_whitespace().collect();
    let field = |index: usize| fields.get(index).and_then(|v| v.parse::<u64>().ok());

    (field(11), field(12))
}
