use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads a shader source file.
///
/// Every line is terminated with `\n`, including a last line that had no
/// terminator in the file. A file that cannot be opened yields an empty
/// string; the problem then surfaces as a compile failure. A read error
/// midway keeps the lines read so far.
pub fn load_source(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::debug!("shader source {} not opened: {e}", path.display());
            return String::new();
        }
    };

    let mut out = String::new();
    for line in BufReader::new(file).lines() {
        let Ok(line) = line else {
            log::debug!("stopped reading {} at an unreadable line", path.display());
            break;
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Where the two shader stages are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("./shaders/vert.glsl"),
            fragment: PathBuf::from("./shaders/frag.glsl"),
        }
    }
}

impl ShaderPaths {
    pub fn load(&self) -> ShaderSources {
        ShaderSources {
            vertex: load_source(&self.vertex),
            fragment: load_source(&self.fragment),
        }
    }
}

/// Loaded source text for both stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}
