//! Canned transcripts for the terminal overlay

use crate::catalog::content::RESUME_URL;

/// Shown when a scratch document is exported with "Run Without Debugging".
pub fn run_scratch(path: &str) -> Vec<String> {
    vec![
        format!("> executing {}...", path),
        "[INFO] Spawning local process...".to_string(),
        "[SUCCESS] File downloaded for local execution.".to_string(),
        "Opening default text editor...".to_string(),
    ]
}

pub fn new_terminal() -> Vec<String> {
    vec![
        "> New Session Initialized...".to_string(),
        "[INFO] Shell active.".to_string(),
    ]
}

/// Opening a project's repository.
pub fn project_source(url: &str) -> Vec<String> {
    vec![
        "> git remote -v".to_string(),
        "> git fetch origin".to_string(),
        format!("[INFO] Locating repository at {}...", url),
        "> git checkout main".to_string(),
        "[SUCCESS] Repository access granted.".to_string(),
        "[INFO] Redirecting to GitHub...".to_string(),
    ]
}

/// Opening a project's live demo.
pub fn project_demo(url: &str) -> Vec<String> {
    vec![
        "> npm run build".to_string(),
        "[INFO] Compiling assets...".to_string(),
        "[INFO] Optimizing production build...".to_string(),
        "[SUCCESS] Build complete.".to_string(),
        format!("[INFO] Launching live instance at {}...", url),
    ]
}

/// "Installing" a social profile extension.
pub fn install_extension(name: &str) -> Vec<String> {
    vec![
        format!("> ext install {}", name.to_lowercase()),
        "[INFO] Resolving package...".to_string(),
        "[INFO] Verifying authentication...".to_string(),
        "[SUCCESS] Extension found.".to_string(),
        format!("[INFO] Opening {} profile...", name),
    ]
}

/// Resume download from the about page.
pub fn download_resume_wget() -> Vec<String> {
    vec![
        format!("> wget {}", RESUME_URL),
        "[INFO] Resolving host...".to_string(),
        "[INFO] Connecting to database...".to_string(),
        "[INFO] Stream detected (PDF/142KB)...".to_string(),
        "[SUCCESS] Suman_Mandal_Resume.pdf saved to /local/downloads.".to_string(),
    ]
}

/// Resume download from the experience page.
pub fn download_resume_curl() -> Vec<String> {
    vec![
        format!("> curl -O {}", RESUME_URL),
        "[INFO] Handshake successful...".to_string(),
        "[INFO] Downloading PDF (142KB)...".to_string(),
        "#################################### 100%".to_string(),
        "[SUCCESS] Saved to /local/downloads/Suman_Mandal_Resume.pdf".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::LineKind;

    #[test]
    fn test_run_scratch_mentions_path() {
        let lines = run_scratch("scratchpad/Untitled.txt");
        assert_eq!(lines[0], "> executing scratchpad/Untitled.txt...");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_install_extension_lowercases_command() {
        let lines = install_extension("GitHub");
        assert_eq!(lines[0], "> ext install github");
        assert_eq!(lines[4], "[INFO] Opening GitHub profile...");
    }

    #[test]
    fn test_every_script_reports_success_or_is_shell() {
        let scripts = [
            run_scratch("x"),
            project_source("https://github.com/x"),
            project_demo("https://demo"),
            install_extension("Kaggle"),
            download_resume_wget(),
            download_resume_curl(),
        ];
        for script in scripts {
            assert!(script
                .iter()
                .any(|l| LineKind::classify(l) == LineKind::Success));
            assert_eq!(LineKind::classify(&script[0]), LineKind::Command);
        }
        assert_eq!(new_terminal().len(), 2);
    }
}
