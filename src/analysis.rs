//! Read-only structural measures over a parsed HP model.

use crate::model::chain::HpChain;
use crate::model::point::LatticePoint;
use crate::model::polarity::Polarity;
use std::collections::HashMap;

/// Summary measures of one conformation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainMeasures {
    /// Beads that landed on an already-occupied lattice site.
    pub collisions: usize,
    /// Unordered pairs of hydrophobic sidechain beads one lattice edge
    /// apart. Always zero for uncolored models.
    pub hh_contacts: usize,
    /// RMS distance of backbone beads from their centroid.
    pub backbone_gyration: f64,
    /// Per-axis (min, max) over all beads, `None` for an empty model.
    pub bounds: Option<(LatticePoint, LatticePoint)>,
}

pub fn measure(chain: &HpChain) -> ChainMeasures {
    ChainMeasures {
        collisions: count_collisions(&chain.points),
        hh_contacts: count_hh_contacts(chain),
        backbone_gyration: backbone_gyration(chain),
        bounds: bounds(&chain.points),
    }
}

fn count_collisions(points: &[LatticePoint]) -> usize {
    let mut occupancy: HashMap<LatticePoint, usize> = HashMap::with_capacity(points.len());
    let mut collisions = 0;
    for &p in points {
        let count = occupancy.entry(p).or_insert(0);
        collisions += *count;
        *count += 1;
    }
    collisions
}

fn count_hh_contacts(chain: &HpChain) -> usize {
    let hydrophobic: Vec<LatticePoint> = chain
        .units()
        .filter(|u| u.label == Some(Polarity::Hydrophobic))
        .map(|u| u.sidechain)
        .collect();

    let mut contacts = 0;
    for (i, a) in hydrophobic.iter().enumerate() {
        for b in &hydrophobic[i + 1..] {
            if a.is_adjacent(b) {
                contacts += 1;
            }
        }
    }
    contacts
}

fn backbone_gyration(chain: &HpChain) -> f64 {
    let backbone: Vec<LatticePoint> = chain.backbone().collect();
    if backbone.is_empty() {
        return 0.0;
    }

    let n = backbone.len() as f64;
    let cx = backbone.iter().map(|p| p.x as f64).sum::<f64>() / n;
    let cy = backbone.iter().map(|p| p.y as f64).sum::<f64>() / n;
    let cz = backbone.iter().map(|p| p.z as f64).sum::<f64>() / n;

    let sum_sq: f64 = backbone
        .iter()
        .map(|p| {
            let (dx, dy, dz) = (p.x as f64 - cx, p.y as f64 - cy, p.z as f64 - cz);
            dx * dx + dy * dy + dz * dz
        })
        .sum();

    (sum_sq / n).sqrt()
}

fn bounds(points: &[LatticePoint]) -> Option<(LatticePoint, LatticePoint)> {
    let first = *points.first()?;
    let mut min = first;
    let mut max = first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        min.z = min.z.min(p.z);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
        max.z = max.z.max(p.z);
    }
    Some((min, max))
}
