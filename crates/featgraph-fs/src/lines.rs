use std::path::{Path, PathBuf};

use futures::TryStreamExt;
use futures::stream::{self, Stream};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

#[derive(Debug, Error)]
pub enum FsError {
  #[error("io error on {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Cómo recorrer un fichero de texto delimitado.
#[derive(Debug, Clone, Copy)]
pub struct LineConfig {
  /// Saltar la primera línea (cabecera).
  pub skip_header: bool,
  /// Saltar líneas vacías o solo con espacios.
  pub skip_blank: bool,
}

impl Default for LineConfig {
  fn default() -> Self {
    Self { skip_header: true, skip_blank: true }
  }
}

/// Línea con su número (1-based, contando la cabecera) para poder
/// señalar filas defectuosas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
  pub number: usize,
  pub text: String,
}

enum ReadState {
  /// Fichero aún sin abrir.
  Pending(PathBuf),
  /// Leyendo; `number` es la última línea consumida.
  Open { path: PathBuf, lines: Lines<BufReader<File>>, number: usize },
  /// Fin del fichero o error ya emitido.
  Done,
}

/// Stream de líneas de `path`, leído en streaming sin cargar el fichero
/// entero. Quita `\r` finales. Tras un error de E/S el stream termina.
pub fn read_lines(path: impl Into<PathBuf>, cfg: LineConfig) -> impl Stream<Item = Result<NumberedLine, FsError>> {
  stream::unfold(ReadState::Pending(path.into()), move |state| async move {
    let (path, mut lines, mut number) = match state {
      ReadState::Done => return None,
      ReadState::Open { path, lines, number } => (path, lines, number),
      ReadState::Pending(path) => match File::open(&path).await {
        Ok(file) => {
          let lines = BufReader::new(file).lines();
          (path, lines, 0)
        }
        Err(source) => return Some((Err(FsError::Io { path, source }), ReadState::Done)),
      },
    };

    loop {
      match lines.next_line().await {
        Ok(Some(raw)) => {
          number += 1;

          if cfg.skip_header && number == 1 {
            continue;
          }

          let text = raw.trim_end_matches('\r').to_string();
          if cfg.skip_blank && text.trim().is_empty() {
            continue;
          }

          return Some((Ok(NumberedLine { number, text }), ReadState::Open { path, lines, number }));
        }
        Ok(None) => return None,
        Err(source) => return Some((Err(FsError::Io { path, source }), ReadState::Done)),
      }
    }
  })
}

/// Atajo: recoge todas las líneas o devuelve el primer error.
pub async fn collect_lines(path: &Path, cfg: LineConfig) -> Result<Vec<NumberedLine>, FsError> {
  read_lines(path, cfg).try_collect().await
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::StreamExt;
  use std::fs;
  use tempfile::tempdir;

  #[tokio::test]
  async fn skips_header_and_blank_lines_keeping_numbers() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("links.csv");
    fs::write(&path, "from,to,year\r\na,b,2001\r\n\r\nb,c,2002\n").unwrap();

    let lines = collect_lines(&path, LineConfig::default()).await.unwrap();

    assert_eq!(
      lines,
      vec![
        NumberedLine { number: 2, text: "a,b,2001".to_string() },
        NumberedLine { number: 4, text: "b,c,2002".to_string() },
      ]
    );
  }

  #[tokio::test]
  async fn keeps_header_when_asked() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("checked.txt");
    fs::write(&path, "id1\nid2\n").unwrap();

    let cfg = LineConfig { skip_header: false, skip_blank: true };
    let lines = collect_lines(&path, cfg).await.unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "id1");
  }

  #[tokio::test]
  async fn missing_file_yields_single_error_then_ends() {
    let tmp = tempdir().unwrap();
    let stream = read_lines(tmp.path().join("missing.csv"), LineConfig::default());
    tokio::pin!(stream);

    assert!(matches!(stream.next().await, Some(Err(FsError::Io { .. }))));
    assert!(stream.next().await.is_none());
  }
}
