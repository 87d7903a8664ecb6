const KB: u64 = 1000;
const MB: u64 = KB * 1000;
const GB: u64 = MB * 1000;
const TB: u64 = GB * 1000;

/// Formats a byte count with decimal units and one truncated decimal,
/// e.g. `999B`, `1.9K`, `12.0M`.
pub fn human_size(bytes: u64) -> String {
    match bytes {
        b if b < KB => format!("{b}B"),
        b if b < MB => scaled(b, KB, 'K'),
        b if b < GB => scaled(b, MB, 'M'),
        b if b < TB => scaled(b, GB, 'G'),
        b => scaled(b, TB, 'T'),
    }
}

fn scaled(bytes: u64, unit: u64, suffix: char) -> String {
    format!("{}.{}{}", bytes / unit, (bytes % unit) / (unit / 10), suffix)
}
