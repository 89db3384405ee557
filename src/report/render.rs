// src/report/render.rs

use std::fmt::{self, Write};

use super::NameReport;

const BAR_WIDTH: usize = 40;

/// Plain-text rendering of a report, section by section.
pub fn render_text(report: &NameReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render_into(&mut out, report)?;
    Ok(out)
}

fn render_into(out: &mut impl Write, report: &NameReport) -> fmt::Result {
    let NameReport { name, year, .. } = report;

    writeln!(out, "US national popularity")?;
    match &report.national {
        Some(n) => writeln!(
            out,
            "National rank in {}: #{} ({} babies)",
            year,
            n.rank,
            thousands(n.count)
        )?,
        None => writeln!(
            out,
            "This name does not appear in the national data for that year."
        )?,
    }
    writeln!(out)?;

    writeln!(out, "Gender usage in {}", year)?;
    writeln!(out, "Used for boys: {:.1}%", report.sex.male_pct)?;
    writeln!(out, "Used for girls: {:.1}%", report.sex.female_pct)?;
    writeln!(out)?;

    writeln!(out, "Where was this name most popular?")?;
    match report.top_states.as_deref() {
        Some(top) if !top.is_empty() => {
            writeln!(out, "Top states for {} in {}:", name, year)?;
            for s in top {
                writeln!(out, "• {} — {} babies", s.state_full, thousands(s.count))?;
            }
            writeln!(out)?;
            let rows: Vec<(String, u64)> = top
                .iter()
                .map(|s| (s.state_full.to_string(), s.count))
                .collect();
            for line in bar_chart(&rows, BAR_WIDTH) {
                writeln!(out, "{}", line)?;
            }
        }
        _ => writeln!(out, "No state-level data available for this year.")?,
    }
    writeln!(out)?;

    writeln!(out, "Popularity over time")?;
    match report.change {
        Some(c) => match c.change_pct {
            Some(pct) => {
                let arrow = if pct > 0.0 { "⬆️" } else { "⬇️" };
                writeln!(
                    out,
                    "Since {}, this name has {} {:.1}% (as of {}).",
                    year,
                    arrow,
                    pct.abs(),
                    c.latest_year
                )?
            }
            None => writeln!(out, "Not enough data to calculate popularity change.")?,
        },
        None => writeln!(out, "Not enough data to calculate popularity change.")?,
    }
    writeln!(out)?;

    writeln!(out, "Popularity by year")?;
    if report.trend.is_empty() {
        writeln!(out, "No historical trend available.")?;
    } else {
        let rows: Vec<(String, u64)> = report
            .trend
            .iter()
            .map(|p| (p.year.to_string(), p.count))
            .collect();
        for line in bar_chart(&rows, BAR_WIDTH) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

/// `1234567` → `"1,234,567"`.
pub fn thousands(n: u64) -> String {
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

/// Horizontal bars scaled so the largest value spans `width` cells.
/// Any nonzero value gets at least one cell.
pub fn bar_chart(rows: &[(String, u64)], width: usize) -> Vec<String> {
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(label, value)| {
            let cells = if max == 0 {
                0
            } else {
                let scaled = (*value as f64 / max as f64 * width as f64).round() as usize;
                if *value > 0 {
                    scaled.max(1)
                } else {
                    0
                }
            };
            let pad = label_width - label.chars().count();
            format!(
                "{}{} {} {}",
                label,
                " ".repeat(pad),
                "█".repeat(cells),
                thousands(*value)
            )
        })
        .collect()
}
