use std::io::{self, Write};

use hpview::{ChainMeasures, HpChain, Polarity};

const INDENT: &str = "      ";

pub fn print_chain_summary(chain: &HpChain, measures: &ChainMeasures) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Residues", format!("{}", chain.residue_count())),
        ("Beads", format!("{}", chain.points.len())),
        (
            "Labels",
            if chain.is_colored() {
                "H/P".to_string()
            } else {
                "none (uncolored)".to_string()
            },
        ),
    ];

    if let Some((min, max)) = &measures.bounds {
        rows.push((
            "Extent",
            format!(
                "{} × {} × {} lattice units",
                max.x - min.x + 1,
                max.y - min.y + 1,
                max.z - min.z + 1
            ),
        ));
    }

    rows.push(("Collisions", format!("{}", measures.collisions)));
    rows.push(("H-H Contacts", format!("{}", measures.hh_contacts)));
    rows.push(("Backbone Rg", format!("{:.3}", measures.backbone_gyration)));

    print_kv_table(&mut out, "Model Summary", &rows);
}

pub fn print_label_distribution(chain: &HpChain) {
    if !chain.is_colored() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let hydrophobic = chain
        .labels
        .iter()
        .filter(|&&l| l == Polarity::Hydrophobic)
        .count();
    let polar = chain.labels.len() - hydrophobic;
    let total = chain.labels.len();

    let data = [("H", hydrophobic), ("P", polar)];

    let _ = writeln!(out, "{}┌─ Label Distribution ─┐", INDENT);
    let _ = writeln!(out, "{}┌───────┬────────┬──────────────────────────────┐", INDENT);
    let _ = writeln!(out, "{}│ Label │  Count │ Distribution                 │", INDENT);
    let _ = writeln!(out, "{}├───────┼────────┼──────────────────────────────┤", INDENT);

    for (label, count) in data {
        let pct = (count as f64 / total as f64) * 100.0;
        let cell = format!("{}  {:>5.1}%", make_bar(pct, 20), pct);
        let _ = writeln!(out, "{}│ {:<5} │ {:>6} │ {:<28} │", INDENT, label, count, cell);
    }

    let _ = writeln!(out, "{}└───────┴────────┴──────────────────────────────┘", INDENT);
    let _ = writeln!(out);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, title);
    let _ = writeln!(out, "{}┌───────────────┬──────────────────────────────┐", INDENT);
    for (key, value) in rows {
        let _ = writeln!(out, "{}│ {:<13} │ {:<28} │", INDENT, key, value);
    }
    let _ = writeln!(out, "{}└───────────────┴──────────────────────────────┘", INDENT);
    let _ = writeln!(out);
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let filled = filled.min(max_width);
    format!("{}{}", "█".repeat(filled), "░".repeat(max_width - filled))
}
