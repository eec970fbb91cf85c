use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Escribe `contents` en un temporal junto a `path` y lo renombra encima,
/// así un lector nunca ve el fichero a medio escribir. Crea el directorio
/// padre si falta.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

/// Lee un fichero completo; `Ok(None)` si no existe.
pub fn read_to_string_opt(path: &Path) -> io::Result<Option<String>> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}
