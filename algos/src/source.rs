use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Loads a UTF-8 text. `-` reads stdin.
///
/// A relative path that does not exist in the working directory is retried
/// next to the running executable.
pub fn load_text(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let candidates = candidate_paths(path);
    let Some(found) = candidates.iter().find(|p| p.is_file()) else {
        let searched: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
        return Err(format!(
            "File '{}' not found (searched: {})",
            path.display(),
            searched.join(", ")
        )
        .into());
    };

    log::debug!("loading text from {}", found.display());
    let text = fs::read_to_string(found)
        .map_err(|e| format!("Error reading file {}: {}", found.display(), e))?;
    Ok(text)
}

fn candidate_paths(path: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![path.to_path_buf()];

    if path.is_relative() {
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(dir.join(path));
        }
    }

    candidates
}
