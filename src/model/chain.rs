use super::point::LatticePoint;
use super::polarity::Polarity;
use crate::error::Error;

/// One backbone/sidechain pair sharing a residue index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub index: usize,
    pub backbone: LatticePoint,
    pub sidechain: LatticePoint,
    pub label: Option<Polarity>,
}

/// A parsed HP lattice model: the ordered bead sequence and the
/// (possibly empty) per-residue polarity sequence.
///
/// Even-indexed beads form the backbone, odd-indexed beads the
/// sidechains; the partition is derived on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HpChain {
    pub points: Vec<LatticePoint>,
    pub labels: Vec<Polarity>,
}

impl HpChain {
    pub fn new(points: Vec<LatticePoint>, labels: Vec<Polarity>) -> Self {
        Self { points, labels }
    }

    #[inline]
    pub fn residue_count(&self) -> usize {
        self.points.len() / 2
    }

    #[inline]
    pub fn is_colored(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Backbone beads, in sequence order (even indices).
    pub fn backbone(&self) -> impl Iterator<Item = LatticePoint> + '_ {
        self.points.iter().copied().step_by(2)
    }

    /// Sidechain beads, in sequence order (odd indices).
    pub fn sidechains(&self) -> impl Iterator<Item = LatticePoint> + '_ {
        self.points.iter().copied().skip(1).step_by(2)
    }

    /// Backbone/sidechain pairs with their labels, if any.
    pub fn units(&self) -> impl Iterator<Item = Unit> + '_ {
        self.points.chunks_exact(2).enumerate().map(|(i, pair)| Unit {
            index: i,
            backbone: pair[0],
            sidechain: pair[1],
            label: self.labels.get(i).copied(),
        })
    }

    /// Checks the pairing invariant: when labels are present the chain
    /// must hold exactly two points per label. The parser deliberately
    /// does not enforce this, so downstream consumers call it before
    /// indexing by residue.
    pub fn validate(&self) -> Result<(), Error> {
        if self.is_colored() && self.points.len() != self.labels.len() * 2 {
            return Err(Error::LengthMismatch {
                points: self.points.len(),
                labels: self.labels.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i32, y: i32, z: i32) -> LatticePoint {
        LatticePoint::new(x, y, z)
    }

    fn sample_chain() -> HpChain {
        HpChain::new(
            vec![pt(0, 0, 0), pt(0, 0, 1), pt(1, 1, 0), pt(2, 1, 0)],
            vec![Polarity::Hydrophobic, Polarity::Polar],
        )
    }

    #[test]
    fn splits_backbone_and_sidechain_by_stride() {
        let chain = sample_chain();
        let backbone: Vec<_> = chain.backbone().collect();
        let sidechain: Vec<_> = chain.sidechains().collect();
        assert_eq!(backbone, vec![pt(0, 0, 0), pt(1, 1, 0)]);
        assert_eq!(sidechain, vec![pt(0, 0, 1), pt(2, 1, 0)]);
    }

    #[test]
    fn units_pair_backbone_with_sidechain() {
        let chain = sample_chain();
        let units: Vec<_> = chain.units().collect();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].backbone, pt(0, 0, 0));
        assert_eq!(units[0].sidechain, pt(0, 0, 1));
        assert_eq!(units[1].backbone, pt(1, 1, 0));
        assert_eq!(units[1].sidechain, pt(2, 1, 0));
        assert_eq!(units[0].label, Some(Polarity::Hydrophobic));
        assert_eq!(units[1].label, Some(Polarity::Polar));
    }

    #[test]
    fn units_have_no_label_for_uncolored_chains() {
        let chain = HpChain::new(vec![pt(0, 0, 0), pt(0, 0, 1)], Vec::new());
        let units: Vec<_> = chain.units().collect();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].label, None);
    }

    #[test]
    fn validate_accepts_paired_chain() {
        assert!(sample_chain().validate().is_ok());
    }

    #[test]
    fn validate_accepts_uncolored_chain_of_any_length() {
        let chain = HpChain::new(vec![pt(0, 0, 0), pt(1, 0, 0), pt(2, 0, 0)], Vec::new());
        assert!(chain.validate().is_ok());
    }

    #[test]
    fn validate_rejects_label_count_mismatch() {
        let chain = HpChain::new(
            vec![pt(0, 0, 0), pt(0, 0, 1)],
            vec![Polarity::Hydrophobic, Polarity::Polar],
        );
        let err = chain.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                points: 2,
                labels: 2
            }
        ));
    }

    #[test]
    fn validate_rejects_odd_point_count_with_labels() {
        let chain = HpChain::new(
            vec![pt(0, 0, 0), pt(0, 0, 1), pt(1, 0, 0)],
            vec![Polarity::Hydrophobic],
        );
        assert!(chain.validate().is_err());
    }
}
