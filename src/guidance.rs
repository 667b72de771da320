use crate::config::HookConfig;

/// Render the next-steps text shown at the end of the hook.
///
/// Pure presentation: identical inputs produce byte-identical output.
/// Two fixed variants, selected by whether frontend creation succeeded;
/// the failure variant adds the manual Angular creation step.
pub fn render(config: &HookConfig, frontend_succeeded: bool) -> String {
    let mut out = String::new();

    out.push_str("Next steps:\n");
    out.push_str(&format!("1. cd {}\n", config.project.name));
    out.push_str("2. Review and update .env file\n");

    if frontend_succeeded {
        out.push_str("3. Create Maven project: cd api && mvn archetype:generate -B ...\n");
        out.push_str("4. Start services: docker-compose up -d\n");
    } else {
        out.push_str(&format!(
            "3. Create Angular project: cd {} && {}\n",
            config.frontend.dir.display(),
            manual_create_hint(config)
        ));
        out.push_str("4. Create Maven project: cd api && mvn archetype:generate -B ...\n");
        out.push_str("5. Start services: docker-compose up -d\n");
    }

    out.push_str("\nFor more details, see README.md\n");
    out
}

/// The `ng new` invocation a user runs by hand when the hook could not
/// create the frontend. Unlike the hook's own invocation this leaves
/// out `--skip-git` and `--skip-install`.
fn manual_create_hint(config: &HookConfig) -> String {
    let mut cmd = format!("ng new {} --directory ./", config.frontend_name());
    if config.frontend.routing {
        cmd.push_str(" --routing");
    }
    cmd.push_str(&format!(" --style={}", config.frontend.style));
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HookConfig {
        let mut config = HookConfig::default();
        config.project.name = "wateralmanak".to_string();
        config
    }

    #[test]
    fn success_variant_begins_at_maven_step() {
        let text = render(&config(), true);
        assert!(text.contains("1. cd wateralmanak\n"));
        assert!(text.contains("2. Review and update .env file\n"));
        assert!(text.contains("3. Create Maven project: cd api && mvn archetype:generate -B ...\n"));
        assert!(text.contains("4. Start services: docker-compose up -d\n"));
        assert!(!text.contains("Create Angular project"));
    }

    #[test]
    fn failure_variant_includes_manual_angular_step() {
        let text = render(&config(), false);
        assert!(text.contains(
            "3. Create Angular project: cd frontend && \
             ng new wateralmanak-frontend --directory ./ --routing --style=scss\n"
        ));
        assert!(text.contains("4. Create Maven project: cd api && mvn archetype:generate -B ...\n"));
        assert!(text.contains("5. Start services: docker-compose up -d\n"));
    }

    #[test]
    fn output_is_deterministic() {
        let config = config();
        assert_eq!(render(&config, true), render(&config, true));
        assert_eq!(render(&config, false), render(&config, false));
        assert_ne!(render(&config, true), render(&config, false));
    }

    #[test]
    fn manual_hint_honors_routing_and_style() {
        let mut config = config();
        config.frontend.routing = false;
        config.frontend.style = "css".to_string();
        assert_eq!(
            manual_create_hint(&config),
            "ng new wateralmanak-frontend --directory ./ --style=css"
        );
    }
}
