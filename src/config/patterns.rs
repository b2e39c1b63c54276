pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    // Compiled and binary artifacts
    "*.pyc",
    "*.pyo",
    "*.o",
    "*.a",
    "*.so",
    "*.dylib",
    "*.dll",
    "*.exe",
    "*.class",
    "*.jar",
    "*.wasm",
    // Archives and media
    "*.zip",
    "*.tar",
    "*.gz",
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.ico",
    "*.pdf",
    // Version control
    ".git/*",
    ".svn/*",
    ".hg/*",
    // Dependencies and build output
    "node_modules/*",
    "__pycache__/*",
    "target/*",
    "dist/*",
    "build/*",
    ".next/*",
    // Lock files and backups
    "*.lock",
    "package-lock.json",
    "*.backup",
    // System files
    ".DS_Store",
    "Thumbs.db",
];

pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &[
    "*.rs",
    "*.py",
    "*.js",
    "*.jsx",
    "*.mjs",
    "*.ts",
    "*.tsx",
    "*.vue",
    "*.svelte",
    "*.html",
    "*.css",
    "*.scss",
    "*.go",
    "*.java",
    "*.kt",
    "*.c",
    "*.h",
    "*.cpp",
    "*.hpp",
    "*.cs",
    "*.rb",
    "*.php",
    "*.swift",
    "*.sh",
    "*.toml",
    "*.yaml",
    "*.yml",
    "*.json",
    "*.xml",
    "*.md",
    "*.txt",
    "*.sql",
    "Makefile",
    "Dockerfile",
];
