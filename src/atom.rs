/// Default atom type for a molecular graph node.
///
/// `Atom` stores what can be read off the line notation: element, charge,
/// isotope, suppressed hydrogens and the aromatic flag. Structural
/// classification for complexity scoring lives in
/// [`AtomType`](crate::complexity::AtomType) and is derived on demand.
///
/// # Examples
///
/// ```
/// use molecular_complexity::Atom;
///
/// let methyl = Atom {
///     atomic_num: 6,
///     hydrogen_count: 3,
///     ..Atom::default()
/// };
/// assert_eq!(methyl.atomic_num, 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). `0` marks an unknown atom.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Mass number. `0` means natural isotopic abundance.
    pub isotope: u16,
    /// Number of implicit (suppressed) hydrogens on this atom.
    ///
    /// These are not graph nodes. [`add_hs`](crate::add_hs) turns them into
    /// explicit hydrogen atoms and resets this count to zero.
    pub hydrogen_count: u8,
    /// Whether the atom was written in aromatic form.
    pub is_aromatic: bool,
}

impl Atom {
    pub fn hydrogen() -> Self {
        Self {
            atomic_num: 1,
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}
