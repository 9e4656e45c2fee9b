pub mod atom;
pub mod bond;
pub mod complexity;
pub mod element;
pub mod hydrogen;
pub mod kekulize;
pub mod mol;
pub mod smiles;
pub mod traits;
pub mod valence;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use complexity::{
    atom_complexities, atom_complexities_with, atom_environments, complexity_of,
    complexity_of_with, molecular_complexity, try_molecular_complexity,
    try_molecular_complexity_with, AtomComplexity, AtomEnvironment, AtomPath, AtomType,
    ComplexityError, ComplexityOptions, IsolatedAtomPolicy, MolecularComplexity,
};
pub use element::Element;
pub use hydrogen::add_hs;
pub use kekulize::{kekulize, KekulizeError};
pub use mol::Mol;
pub use smiles::{from_smiles, SmilesError};
pub use traits::{HasAtomicNum, HasHydrogenCount, MolecularGraph};
pub use valence::{check_valence, total_valence, ValenceError};
