use super::{Coalition, ExtensionFamily};
use crate::aa::{AAFramework, LabelType};

/// Returns the set of arguments attacked by at least one member of a coalition.
pub fn attacked_by<T>(coalition: &Coalition, af: &AAFramework<T>) -> Coalition
where
    T: LabelType,
{
    coalition
        .iter()
        .flat_map(|id| af.iter_attacks_from_id(id).map(|att| att.attacked().id()))
        .collect()
}

/// Derives the family of OUT extensions associated with a family of IN extensions.
///
/// For each IN extension, the OUT extension is the set of the arguments it attacks.
/// OUT extensions are added in the order of the IN extensions, skipping the ones that are already present;
/// thus, the OUT family never has more coalitions than the IN one.
///
/// # Example
///
/// ```
/// # use argrank::aa::{AAFramework, ArgumentSet};
/// # use argrank::coalitions::{derive_out_family, Coalition, ExtensionFamily};
/// let labels = vec!["1", "2", "3"];
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
/// af.new_attack(&"1", &"2").unwrap();
/// af.new_attack(&"2", &"3").unwrap();
/// let ext_in = ExtensionFamily::new(vec![Coalition::new(vec![0, 2])]);
/// let ext_out = derive_out_family(&ext_in, &af);
/// assert_eq!(vec![&Coalition::new(vec![1])], ext_out.iter().collect::<Vec<_>>());
/// ```
pub fn derive_out_family<T>(in_family: &ExtensionFamily, af: &AAFramework<T>) -> ExtensionFamily
where
    T: LabelType,
{
    ExtensionFamily::new_without_duplicates(in_family.iter().map(|c| attacked_by(c, af)))
}
