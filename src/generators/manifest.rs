//! `package.json` for serving the brand guide locally. Does not depend on the tokens.

const PACKAGE_JSON: &str = r#"{
  "name": "brand-guide",
  "version": "1.0.0",
  "description": "Brand guide generated from Figma",
  "main": "index.html",
  "scripts": {
    "dev": "npx serve .",
    "build": "echo 'No build step required'"
  },
  "devDependencies": {
    "serve": "^14.0.0"
  }
}"#;

pub fn render() -> String {
    PACKAGE_JSON.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_is_valid_json() {
        let manifest: serde_json::Value = serde_json::from_str(&render()).unwrap();
        assert_eq!(manifest["name"], "brand-guide");
        assert_eq!(manifest["version"], "1.0.0");
        assert_eq!(manifest["scripts"]["dev"], "npx serve .");
        assert_eq!(manifest["devDependencies"]["serve"], "^14.0.0");
    }
}
