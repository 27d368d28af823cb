use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{de::DeserializeOwned, Serialize};

use super::{hash_graph::HashGraph, Weight};
use crate::error::{PathError, PathResult};

/// Graphs read from and written to disk are keyed by node labels.
pub type LabeledGraph<W> = HashGraph<String, W>;

pub struct GraphFactory {}

impl GraphFactory {
    /// Reads a `.json` adjacency map or a `.bincode` file.
    pub fn from_file<W>(path: &Path) -> PathResult<LabeledGraph<W>>
    where
        W: Weight + DeserializeOwned,
    {
        let reader = BufReader::new(File::open(path)?);
        let graph = match extension(path)? {
            Format::Json => serde_json::from_reader(reader)?,
            Format::Bincode => bincode::deserialize_from(reader)?,
        };
        Ok(graph)
    }

    pub fn to_file<W>(graph: &LabeledGraph<W>, path: &Path) -> PathResult<()>
    where
        W: Weight + Serialize,
    {
        let format = extension(path)?;
        let mut writer = BufWriter::new(File::create(path)?);
        match format {
            Format::Json => serde_json::to_writer(&mut writer, graph)?,
            Format::Bincode => bincode::serialize_into(&mut writer, graph)?,
        }
        writer.flush()?;
        Ok(())
    }
}

enum Format {
    Json,
    Bincode,
}

fn extension(path: &Path) -> PathResult<Format> {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("bincode") => Ok(Format::Bincode),
        _ => Err(PathError::UnsupportedFormat(path.display().to_string())),
    }
}
