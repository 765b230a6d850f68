use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;

const BIN_NAME: &str = "lidcheck";

pub const ENGLISH: &str = "This is a longer English sentence to ensure correct detection.";
pub const FRENCH: &str =
    "Bonjour tout le monde, merci beaucoup de votre visite et à bientôt dans notre magasin.";
pub const GERMAN: &str =
    "Guten Morgen, wie geht es Ihnen heute? Wir freuen uns sehr über Ihren Besuch.";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the upward config search at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// Project with a single `strings.xml` holding `entries` as `(name, text)`.
    pub fn with_strings(entries: &[(&str, &str)]) -> Result<Self> {
        let body: String = entries
            .iter()
            .map(|(name, text)| format!("    <string name=\"{}\">{}</string>\n", name, text))
            .collect();
        Self::with_file(
            "strings.xml",
            &format!("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n{}</resources>\n", body),
        )
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// `lidcheck check --resource strings.xml --output output.csv`
    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["check", "--resource", "strings.xml", "--output", "output.csv"]);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Parsed CSV report rows, header excluded.
    pub fn report_rows(&self, path: &str) -> Result<Vec<Vec<String>>> {
        let mut reader = csv::Reader::from_path(self.project_dir.join(path))?;
        let headers = reader.headers()?.clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["Name", "Text", "Language", "Confidence"]
        );

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(String::from).collect());
        }
        Ok(rows)
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
