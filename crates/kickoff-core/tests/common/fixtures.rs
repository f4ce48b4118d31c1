//! Starter template fixtures

use camino::{Utf8Path, Utf8PathBuf};
use kickoff_core::types::ScaffoldParams;
use std::process::Command;

pub const MANIFEST: &str = r#"{
  "name": "frontend-starter",
  "version": "0.0.0",
  "description": "Starter template for front-end apps",
  "author": "Starter Maintainers",
  "license": "MIT",
  "repository": {
    "type": "git",
    "url": "https://github.com/foxxyz/front-end-starter.git"
  },
  "scripts": {
    "dev": "vite",
    "build": "vite build"
  }
}
"#;

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <title>Frontend Starter</title>
  </head>
  <body>
    <div id="app"></div>
  </body>
</html>
"#;

pub const HOME_COMPONENT: &str = r#"<template>
  <main>
    <h1 class="title">Frontend Starter</h1>
  </main>
</template>
"#;

pub const README: &str = "Frontend Starter
================

A starter template for front-end apps.

Requirements
------------

- Node.js 20+

Installation
------------

```
git clone https://github.com/foxxyz/front-end-starter.git my-app
npm install
```

Usage
-----

Run `npm run dev`.

Deployment
----------

Run `npm run build`.

License
-------

MIT

Contributing
------------

```
git clone https://github.com/foxxyz/front-end-starter.git
```
";

/// Parameters for a typical project
pub fn sample_params() -> ScaffoldParams {
    ScaffoldParams {
        app_name: "Acme Dashboard".to_string(),
        package_name: "acme-dashboard".to_string(),
        author: "Jane Doe".to_string(),
        description: "Dashboard for Acme operations".to_string(),
        version: "1.0.0".to_string(),
        license: "MIT".to_string(),
        repository_url: "https://github.com/acme/acme-dashboard.git".to_string(),
    }
}

/// Run git in `dir` with a throwaway identity, panicking on failure
pub fn git(dir: &Utf8Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(["-c", "user.name=Fixture", "-c", "user.email=fixture@example.com"])
        .args(args)
        .output()
        .expect("git should be installed");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Build a committed starter template repository at `<root>/template`
pub fn create_template_repo(root: &Utf8Path) -> Utf8PathBuf {
    let repo = root.join("template");
    let files = [
        ("package.json", MANIFEST),
        ("index.html", INDEX_HTML),
        ("src/pages/Home.vue", HOME_COMPONENT),
        ("README.md", README),
        ("LICENSE", "MIT License\n\nCopyright (c) 2020 Starter Maintainers\n"),
        ("package-lock.json", "{}\n"),
        (".github/workflows/ci.yml", "name: ci\n"),
        (".travis.yml", "language: node_js\n"),
    ];

    for (relative, content) in files {
        let path = repo.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    git(&repo, &["init", "--quiet", "--initial-branch", "main"]);
    git(&repo, &["add", "--all"]);
    git(&repo, &["commit", "--quiet", "-m", "starter template"]);

    repo
}

/// Read a file below `root`
pub fn read(root: &Utf8Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).unwrap()
}
