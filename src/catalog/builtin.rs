//! Built-in template catalog.
//!
//! These entries are constructed once at startup and never mutated.
//! File contents are intentionally minimal stubs; `{{name}}` is replaced
//! with the project name at generation time.

use super::template::{Complexity, Template, TemplateFile, TemplateStructure};

fn file(path: &str, content: &str) -> TemplateFile {
    TemplateFile {
        path: path.to_string(),
        content: content.to_string(),
    }
}

fn readme(description: &str) -> String {
    format!("# {{{{name}}}}\n\n{description}\n")
}

fn rust_cli() -> Template {
    Template {
        name: "rust-cli".to_string(),
        description: "Command-line application in Rust with clap".to_string(),
        project_type: "cli".to_string(),
        language: "rust".to_string(),
        framework: Some("clap".to_string()),
        database: None,
        testing: Some("cargo-test".to_string()),
        build_tool: Some("cargo".to_string()),
        features: vec!["argument parsing".to_string(), "error handling".to_string()],
        complexity: Complexity::Simple,
        tags: vec!["rust".to_string(), "cli".to_string()],
        structure: TemplateStructure {
            folders: vec!["src".to_string()],
            files: vec![
                file(
                    "Cargo.toml",
                    "[package]\nname = \"{{name}}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[dependencies]\nclap = { version = \"4\", features = [\"derive\"] }\nanyhow = \"1\"\n",
                ),
                file(
                    "src/main.rs",
                    "use anyhow::Result;\nuse clap::Parser;\n\n#[derive(Parser)]\n#[command(about = \"{{name}}\")]\nstruct Cli {}\n\nfn main() -> Result<()> {\n    let _cli = Cli::parse();\n    println!(\"{{name}} is alive\");\n    Ok(())\n}\n",
                ),
                file(".gitignore", "/target\n"),
                file("README.md", &readme("Command-line application.")),
            ],
        },
    }
}

fn rust_library() -> Template {
    Template {
        name: "rust-library".to_string(),
        description: "Reusable Rust library crate".to_string(),
        project_type: "library".to_string(),
        language: "rust".to_string(),
        framework: None,
        database: None,
        testing: Some("cargo-test".to_string()),
        build_tool: Some("cargo".to_string()),
        features: vec!["unit tests".to_string()],
        complexity: Complexity::Simple,
        tags: vec!["rust".to_string(), "library".to_string()],
        structure: TemplateStructure {
            folders: vec!["src".to_string()],
            files: vec![
                file(
                    "Cargo.toml",
                    "[package]\nname = \"{{name}}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[dependencies]\n",
                ),
                file(
                    "src/lib.rs",
                    "pub fn hello() -> &'static str {\n    \"hello from {{name}}\"\n}\n\n#[cfg(test)]\nmod tests {\n    use super::*;\n\n    #[test]\n    fn test_hello() {\n        assert!(hello().contains(\"{{name}}\"));\n    }\n}\n",
                ),
                file(".gitignore", "/target\n"),
                file("README.md", &readme("Library crate.")),
            ],
        },
    }
}

fn rust_web_api() -> Template {
    Template {
        name: "rust-web-api".to_string(),
        description: "REST API in Rust with axum and PostgreSQL".to_string(),
        project_type: "web-api".to_string(),
        language: "rust".to_string(),
        framework: Some("axum".to_string()),
        database: Some("postgresql".to_string()),
        testing: Some("cargo-test".to_string()),
        build_tool: Some("cargo".to_string()),
        features: vec![
            "routing".to_string(),
            "database access".to_string(),
            "structured logging".to_string(),
        ],
        complexity: Complexity::Medium,
        tags: vec!["rust".to_string(), "api".to_string(), "backend".to_string()],
        structure: TemplateStructure {
            folders: vec![
                "src".to_string(),
                "src/routes".to_string(),
                "migrations".to_string(),
            ],
            files: vec![
                file(
                    "Cargo.toml",
                    "[package]\nname = \"{{name}}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[dependencies]\naxum = \"0.7\"\ntokio = { version = \"1\", features = [\"full\"] }\nsqlx = { version = \"0.8\", features = [\"postgres\", \"runtime-tokio\"] }\ntracing = \"0.1\"\ntracing-subscriber = \"0.3\"\n",
                ),
                file(
                    "src/main.rs",
                    "use axum::{routing::get, Router};\n\n#[tokio::main]\nasync fn main() {\n    tracing_subscriber::fmt::init();\n    let app = Router::new().route(\"/health\", get(|| async { \"ok\" }));\n    let listener = tokio::net::TcpListener::bind(\"0.0.0.0:3000\").await.unwrap();\n    axum::serve(listener, app).await.unwrap();\n}\n",
                ),
                file("src/routes/mod.rs", "// Route handlers for {{name}}\n"),
                file(".env.example", "DATABASE_URL=postgres://localhost/{{name}}\n"),
                file(".gitignore", "/target\n.env\n"),
                file("README.md", &readme("REST API backed by PostgreSQL.")),
            ],
        },
    }
}

fn node_express() -> Template {
    Template {
        name: "node-express".to_string(),
        description: "Express.js web server in JavaScript".to_string(),
        project_type: "web-api".to_string(),
        language: "javascript".to_string(),
        framework: Some("express".to_string()),
        database: None,
        testing: Some("jest".to_string()),
        build_tool: Some("npm".to_string()),
        features: vec!["routing".to_string(), "middleware".to_string()],
        complexity: Complexity::Simple,
        tags: vec!["javascript".to_string(), "node".to_string(), "api".to_string()],
        structure: TemplateStructure {
            folders: vec!["src".to_string(), "test".to_string()],
            files: vec![
                file(
                    "package.json",
                    "{\n  \"name\": \"{{name}}\",\n  \"version\": \"0.1.0\",\n  \"main\": \"src/index.js\",\n  \"scripts\": {\n    \"start\": \"node src/index.js\",\n    \"test\": \"jest\"\n  },\n  \"dependencies\": {\n    \"express\": \"^4.19.0\"\n  },\n  \"devDependencies\": {\n    \"jest\": \"^29.0.0\"\n  }\n}\n",
                ),
                file(
                    "src/index.js",
                    "const express = require('express');\n\nconst app = express();\napp.get('/health', (req, res) => res.send('ok'));\n\napp.listen(3000, () => console.log('{{name}} listening on 3000'));\n",
                ),
                file(".gitignore", "node_modules/\n"),
                file("README.md", &readme("Express.js web server.")),
            ],
        },
    }
}

fn react_app() -> Template {
    Template {
        name: "react-app".to_string(),
        description: "React single-page app in TypeScript with Vite".to_string(),
        project_type: "frontend".to_string(),
        language: "typescript".to_string(),
        framework: Some("react".to_string()),
        database: None,
        testing: Some("vitest".to_string()),
        build_tool: Some("vite".to_string()),
        features: vec!["components".to_string(), "hot reload".to_string()],
        complexity: Complexity::Medium,
        tags: vec![
            "typescript".to_string(),
            "react".to_string(),
            "frontend".to_string(),
        ],
        structure: TemplateStructure {
            folders: vec!["src".to_string(), "src/components".to_string(), "public".to_string()],
            files: vec![
                file(
                    "package.json",
                    "{\n  \"name\": \"{{name}}\",\n  \"version\": \"0.1.0\",\n  \"scripts\": {\n    \"dev\": \"vite\",\n    \"build\": \"vite build\",\n    \"test\": \"vitest\"\n  },\n  \"dependencies\": {\n    \"react\": \"^18.3.0\",\n    \"react-dom\": \"^18.3.0\"\n  },\n  \"devDependencies\": {\n    \"typescript\": \"^5.5.0\",\n    \"vite\": \"^5.4.0\",\n    \"vitest\": \"^2.0.0\"\n  }\n}\n",
                ),
                file(
                    "src/App.tsx",
                    "export default function App() {\n  return <h1>{{name}}</h1>;\n}\n",
                ),
                file(
                    "src/main.tsx",
                    "import { createRoot } from 'react-dom/client';\nimport App from './App';\n\ncreateRoot(document.getElementById('root')!).render(<App />);\n",
                ),
                file(
                    "index.html",
                    "<!doctype html>\n<html>\n  <head><title>{{name}}</title></head>\n  <body>\n    <div id=\"root\"></div>\n    <script type=\"module\" src=\"/src/main.tsx\"></script>\n  </body>\n</html>\n",
                ),
                file("tsconfig.json", "{\n  \"compilerOptions\": {\n    \"jsx\": \"react-jsx\",\n    \"strict\": true,\n    \"module\": \"esnext\",\n    \"moduleResolution\": \"bundler\"\n  }\n}\n"),
                file(".gitignore", "node_modules/\ndist/\n"),
                file("README.md", &readme("React single-page application.")),
            ],
        },
    }
}

fn python_fastapi() -> Template {
    Template {
        name: "python-fastapi".to_string(),
        description: "FastAPI service in Python with PostgreSQL".to_string(),
        project_type: "web-api".to_string(),
        language: "python".to_string(),
        framework: Some("fastapi".to_string()),
        database: Some("postgresql".to_string()),
        testing: Some("pytest".to_string()),
        build_tool: Some("pip".to_string()),
        features: vec!["routing".to_string(), "async handlers".to_string()],
        complexity: Complexity::Medium,
        tags: vec!["python".to_string(), "api".to_string(), "backend".to_string()],
        structure: TemplateStructure {
            folders: vec!["app".to_string(), "tests".to_string()],
            files: vec![
                file(
                    "app/main.py",
                    "from fastapi import FastAPI\n\napp = FastAPI(title=\"{{name}}\")\n\n\n@app.get(\"/health\")\nasync def health():\n    return {\"status\": \"ok\"}\n",
                ),
                file("app/__init__.py", ""),
                file(
                    "tests/test_health.py",
                    "from fastapi.testclient import TestClient\n\nfrom app.main import app\n\n\ndef test_health():\n    client = TestClient(app)\n    assert client.get(\"/health\").status_code == 200\n",
                ),
                file(
                    "requirements.txt",
                    "fastapi>=0.110\nuvicorn>=0.29\npsycopg[binary]>=3.1\npytest>=8.0\nhttpx>=0.27\n",
                ),
                file(".gitignore", "__pycache__/\n.venv/\n"),
                file("README.md", &readme("FastAPI service.")),
            ],
        },
    }
}

fn go_api() -> Template {
    Template {
        name: "go-api".to_string(),
        description: "HTTP API in Go with the standard library".to_string(),
        project_type: "web-api".to_string(),
        language: "go".to_string(),
        framework: None,
        database: None,
        testing: Some("go-test".to_string()),
        build_tool: Some("go".to_string()),
        features: vec!["routing".to_string()],
        complexity: Complexity::Simple,
        tags: vec!["go".to_string(), "api".to_string()],
        structure: TemplateStructure {
            folders: vec!["cmd/server".to_string()],
            files: vec![
                file("go.mod", "module {{name}}\n\ngo 1.22\n"),
                file(
                    "cmd/server/main.go",
                    "package main\n\nimport (\n\t\"log\"\n\t\"net/http\"\n)\n\nfunc main() {\n\thttp.HandleFunc(\"/health\", func(w http.ResponseWriter, r *http.Request) {\n\t\tw.Write([]byte(\"ok\"))\n\t})\n\tlog.Println(\"{{name}} listening on :8080\")\n\tlog.Fatal(http.ListenAndServe(\":8080\", nil))\n}\n",
                ),
                file(".gitignore", "{{name}}\n"),
                file("README.md", &readme("HTTP API in Go.")),
            ],
        },
    }
}

fn rust_workspace() -> Template {
    Template {
        name: "rust-workspace".to_string(),
        description: "Multi-crate Rust workspace: core library, CLI, and integration tests".to_string(),
        project_type: "workspace".to_string(),
        language: "rust".to_string(),
        framework: Some("clap".to_string()),
        database: None,
        testing: Some("cargo-test".to_string()),
        build_tool: Some("cargo".to_string()),
        features: vec![
            "workspace layout".to_string(),
            "shared core crate".to_string(),
            "CI pipeline".to_string(),
        ],
        complexity: Complexity::Complex,
        tags: vec!["rust".to_string(), "workspace".to_string()],
        structure: TemplateStructure {
            folders: vec![
                "crates/core/src".to_string(),
                "crates/cli/src".to_string(),
                ".github/workflows".to_string(),
            ],
            files: vec![
                file(
                    "Cargo.toml",
                    "[workspace]\nmembers = [\"crates/core\", \"crates/cli\"]\nresolver = \"2\"\n",
                ),
                file(
                    "crates/core/Cargo.toml",
                    "[package]\nname = \"{{name}}-core\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[dependencies]\n",
                ),
                file(
                    "crates/core/src/lib.rs",
                    "pub fn version() -> &'static str {\n    env!(\"CARGO_PKG_VERSION\")\n}\n",
                ),
                file(
                    "crates/cli/Cargo.toml",
                    "[package]\nname = \"{{name}}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[dependencies]\n{{name}}-core = { path = \"../core\" }\nclap = { version = \"4\", features = [\"derive\"] }\nanyhow = \"1\"\n",
                ),
                file(
                    "crates/cli/src/main.rs",
                    "use anyhow::Result;\nuse clap::Parser;\n\n#[derive(Parser)]\nstruct Cli {}\n\nfn main() -> Result<()> {\n    let _cli = Cli::parse();\n    println!(\"{{name}} {}\", {{name_snake}}_core::version());\n    Ok(())\n}\n",
                ),
                file(
                    ".github/workflows/ci.yml",
                    "name: ci\non: [push, pull_request]\njobs:\n  test:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n      - run: cargo test --workspace\n",
                ),
                file(".gitignore", "/target\n"),
                file("README.md", &readme("Multi-crate Rust workspace.")),
            ],
        },
    }
}

/// All built-in templates, in catalog order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        rust_cli(),
        rust_library(),
        rust_web_api(),
        rust_workspace(),
        node_express(),
        react_app(),
        python_fastapi(),
        go_api(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_unique() {
        let templates = builtin_templates();
        let names: HashSet<_> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), templates.len());
    }

    #[test]
    fn test_builtins_declare_files() {
        for template in builtin_templates() {
            assert!(
                !template.structure.files.is_empty(),
                "{} declares no files",
                template.name
            );
            assert!(
                template.structure.files.iter().any(|f| f.path == "README.md"),
                "{} has no README",
                template.name
            );
        }
    }

    #[test]
    fn test_builtin_paths_are_relative() {
        for template in builtin_templates() {
            for folder in &template.structure.folders {
                assert!(!folder.starts_with('/'), "{folder} is absolute");
            }
            for file in &template.structure.files {
                assert!(!file.path.starts_with('/'), "{} is absolute", file.path);
            }
        }
    }
}
