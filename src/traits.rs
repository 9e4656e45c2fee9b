use crate::element::Element;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

/// Read-only view of a molecular graph, as consumed by the complexity
/// scorer.
///
/// Atoms are addressed by dense indices `0..atom_count()`. Index stability
/// is the implementor's responsibility: the same index must name the same
/// atom for every query during one scoring call.
///
/// [`Mol`](crate::Mol) implements this for any atom type carrying an atomic
/// number and a suppressed-hydrogen count. Other graph representations can
/// implement it directly.
pub trait MolecularGraph {
    fn atom_count(&self) -> usize;

    /// Element of atom `atom`, or `None` if it has no periodic-table entry.
    fn element(&self, atom: usize) -> Option<Element>;

    /// Bonded neighbors in the order the graph reports them. One entry per
    /// neighbor atom regardless of bond multiplicity.
    fn neighbors(&self, atom: usize) -> impl Iterator<Item = usize> + '_;

    /// Hydrogens attached to `atom` that are not graph nodes.
    fn implicit_hydrogens(&self, atom: usize) -> u8;

    /// Connections including implicit hydrogens.
    fn total_degree(&self, atom: usize) -> u8 {
        let explicit = self.neighbors(atom).count();
        u8::try_from(explicit)
            .unwrap_or(u8::MAX)
            .saturating_add(self.implicit_hydrogens(atom))
    }

    /// Hydrogens attached to `atom`, both explicit neighbors and implicit.
    ///
    /// A hydrogen never counts itself, so a hydrogen bonded to carbon
    /// reports zero.
    fn total_hydrogens(&self, atom: usize) -> u8 {
        let explicit = self
            .neighbors(atom)
            .filter(|&nb| self.element(nb).is_some_and(Element::is_hydrogen))
            .count();
        u8::try_from(explicit)
            .unwrap_or(u8::MAX)
            .saturating_add(self.implicit_hydrogens(atom))
    }
}
