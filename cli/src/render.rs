use std::fmt::Write as _;

use dolphin_engine::api::{RareListing, ResetReport, TuneReport};
use dolphin_engine::{display_rarity, earn_per_minute, SimulatorSpec, Target, TuneRecord};

/// "1 day, 2 hours and 3 seconds". Zero (or sub-second) becomes "0 seconds".
pub fn format_duration(ms: u64) -> String {
    let seconds = (ms / 1000) % 60;
    let minutes = (ms / (1000 * 60)) % 60;
    let hours = (ms / (1000 * 60 * 60)) % 24;
    let days = ms / (1000 * 60 * 60 * 24);

    let mut parts = Vec::new();
    for (n, unit) in [
        (days, "day"),
        (hours, "hour"),
        (minutes, "minute"),
        (seconds, "second"),
    ] {
        if n > 0 {
            parts.push(format!("{} {}{}", n, unit, if n > 1 { "s" } else { "" }));
        }
    }

    match parts.split_last() {
        None => "0 seconds".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

/// Thousands separators: 1234567 → "1,234,567".
pub fn format_points(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn render_listing(listing: &RareListing, target: &Target) -> String {
    let mut out = format!(
        "📜 Rare Items Available ({}) in {} (Largest to Smallest Rarity):\n\n",
        listing.total, listing.target
    );
    for section in &listing.sections {
        for (i, e) in section.items.iter().enumerate() {
            let _ = writeln!(
                out,
                "➜ {}. {} {} (From: {})\nRarity: {}%",
                i + 1,
                e.icon,
                e.name,
                section.simulator,
                e.rarity
            );
        }
    }
    let _ = write!(
        out,
        "\nUse dolphin tune {} to automatically tune up to three rarest items",
        target.as_arg()
    );
    out
}

pub fn render_tune(report: &TuneReport) -> String {
    let mut out = format!(
        "✔ Automatically tuned {} rare items in {}!\nCost: 💷{}\n\n",
        report.total_tuned,
        report.target,
        format_points(report.cost)
    );
    for section in &report.sections {
        for (i, e) in section.items.iter().enumerate() {
            let _ = writeln!(out, "➜ {}. {} {} ({})", i + 1, e.icon, e.name, section.simulator);
        }
    }
    let _ = write!(
        out,
        "Battle points left: 💷{}",
        format_points(report.battle_points_left)
    );
    out
}

pub fn render_reset(report: &ResetReport) -> String {
    format!(
        "✔ Reset {} tuned items in {}!",
        report.total_reset, report.target
    )
}

pub fn render_info(spec: &SimulatorSpec) -> String {
    let meta = &spec.meta;
    let or = |s: &str, fallback: &str| {
        if s.is_empty() {
            fallback.to_string()
        } else {
            s.to_string()
        }
    };
    let aliases = if meta.aliases.is_empty() {
        "none".to_string()
    } else {
        meta.aliases.join(", ")
    };
    format!(
        "📋 Command Info: {}\nDescription: {}\nAuthor: {}\nVersion: {}\nUsage: {}\nCategory: {}\nAliases: {}\nShop Price: 💷{}",
        meta.name,
        or(&meta.description, "N/A"),
        or(&meta.author, "Unknown"),
        or(&meta.version, "N/A"),
        or(&meta.usage, "Not specified"),
        or(&meta.category, "N/A"),
        aliases,
        format_points(meta.shop_price)
    )
}

pub fn render_catalog(spec: &SimulatorSpec) -> String {
    let mut out = format!(
        "{} {}: {} items, storage {} (upgrade 💷{})\n",
        spec.action_emoji,
        spec.key,
        spec.items.len(),
        spec.initial_storage,
        format_points(spec.storage_price)
    );
    for item in &spec.items {
        let (lo, hi) = earn_per_minute(item);
        let _ = writeln!(
            out,
            "{} {:<24} chance {:>5.1}%  rarity {:>3}%  every {}s  💷{:.1}-{:.1}/min",
            item.icon,
            item.name,
            item.drop_chance * 100.0,
            display_rarity(item),
            item.delay_seconds,
            lo,
            hi
        );
    }
    out
}

/// Current tune marks for one simulator; `now` is epoch ms.
pub fn render_status(simulator: &str, record: &TuneRecord, now: i64) -> String {
    if !record.is_tuned() {
        return format!("{}: not tuned", simulator);
    }
    let names = record
        .tuned_names
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    match record.tuned_at {
        Some(at) => {
            let age = u64::try_from(now.saturating_sub(at)).unwrap_or(0);
            format!("{}: {} (tuned {} ago)", simulator, names, format_duration(age))
        }
        None => format!("{}: {}", simulator, names),
    }
}
