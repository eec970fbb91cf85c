use crate::domain::activity::{ActivityRange, ActivityRecord};
use crate::domain::spell::Spell;
use crate::domain::year::Year;

/// Comprime un conjunto de años en la secuencia mínima de spells contiguos.
///
/// Ordena y elimina duplicados, así que el orden de entrada no importa.
/// No filtra años centinela: quien llama debe aplicar
/// [`is_valid_year`](crate::domain::is_valid_year) antes si lo necesita.
pub fn coalesce<I>(years: I) -> Vec<Spell>
where
  I: IntoIterator<Item = Year>,
{
  let mut sorted: Vec<Year> = years.into_iter().collect();
  sorted.sort_unstable();
  sorted.dedup();

  let mut spells: Vec<Spell> = Vec::new();

  for year in sorted {
    match spells.last_mut() {
      Some(current) if year == current.end() + 1 => current.extend_to(year),
      _ => spells.push(Spell::single(year)),
    }
  }

  spells
}

/// Reconstruye los años individuales de una secuencia de spells.
pub fn flatten(spells: &[Spell]) -> impl Iterator<Item = Year> + '_ {
  spells.iter().flat_map(Spell::years)
}

/// Rango de actividad de un artista: primer y último año con lanzamientos,
/// sobre los años crudos. `None` si el registro no tiene años.
///
/// Un primer año centinela deja el rango inválido; no se recorta.
pub fn activity_range(record: &ActivityRecord) -> Option<ActivityRange> {
  let (&first, _) = record.year_counts.first_key_value()?;
  let (&last, _) = record.year_counts.last_key_value()?;
  Some(ActivityRange { first, last })
}
