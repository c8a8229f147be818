mod common;

use common::TestEnv;

const VARIANT_CONFIG: &str = r#"
[catalog]
paths = ["Simplr/Assets.xcassets"]

[output]
dir = "build/{variant}/DerivedSources"

[[variants]]
name = "Debug-iphoneos"

[[variants]]
name = "Debug-iphonesimulator"
exclude = ["bcs-*"]
"#;

#[test]
fn variants_generate_one_header_each() {
    let env = TestEnv::new();
    env.simplr_catalog();
    env.write("acsym.toml", VARIANT_CONFIG);

    let result = env.run(&["generate"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let device = env.read("build/Debug-iphoneos/DerivedSources/GeneratedAssetSymbols.h");
    assert_eq!(device, common::SIMPLR_HEADER);

    let sim = env.read("build/Debug-iphonesimulator/DerivedSources/GeneratedAssetSymbols.h");
    assert!(!sim.contains("BcsLogo"));
    assert_eq!(sim.matches("static NSString * const").count(), 2);
}

#[test]
fn variant_flag_restricts_generation() {
    let env = TestEnv::new();
    env.simplr_catalog();
    env.write("acsym.toml", VARIANT_CONFIG);

    let result = env.run(&["generate", "--variant", "Debug-iphonesimulator"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    assert!(env
        .path("build/Debug-iphonesimulator/DerivedSources/GeneratedAssetSymbols.h")
        .exists());
    assert!(!env.path("build/Debug-iphoneos").exists());
}

#[test]
fn list_groups_by_variant() {
    let env = TestEnv::new();
    env.simplr_catalog();
    env.write("acsym.toml", VARIANT_CONFIG);

    let result = env.run(&["list"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Debug-iphoneos (3 assets)"));
    assert!(result.stdout.contains("Debug-iphonesimulator (2 assets)"));
}

#[test]
fn config_paths_resolve_against_config_dir() {
    let env = TestEnv::new();
    env.simplr_catalog();
    env.write(
        "config/acsym.toml",
        "[catalog]\npaths = [\"../Simplr/Assets.xcassets\"]\n\n[output]\ndir = \"out\"\n",
    );

    let result = env.run(&["--config", "config/acsym.toml", "generate"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(env.path("config/out/GeneratedAssetSymbols.h").exists());
}

#[test]
fn symbols_section_sets_prefix_and_visibility() {
    let env = TestEnv::new();
    env.write(
        "acsym.toml",
        "[catalog]\npaths = [\"assets.txt\"]\n\n[symbols]\nimage_prefix = \"SPImage\"\nmodule_private = false\n",
    );
    env.write("assets.txt", "bcs-logo\n");

    assert!(env.run(&["generate"]).success);
    let header = env.read("DerivedSources/GeneratedAssetSymbols.h");
    assert!(header.contains("static NSString * const SPImageBcsLogo = @\"bcs-logo\";"));
}

#[test]
fn env_overrides_config_and_cli_overrides_env() {
    let env = TestEnv::new();
    env.write("acsym.toml", "[symbols]\nimage_prefix = \"FileImage\"\n");

    let from_env = env.run_with_env(
        &["list", "--names", "logo"],
        &[("ACSYM_IMAGE_PREFIX", "EnvImage")],
    );
    assert!(from_env.stdout.contains("EnvImageLogo"), "{}", from_env.stdout);

    let from_cli = env.run_with_env(
        &["list", "--names", "logo", "--prefix", "CliImage"],
        &[("ACSYM_IMAGE_PREFIX", "EnvImage")],
    );
    assert!(from_cli.stdout.contains("CliImageLogo"), "{}", from_cli.stdout);
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write("acsym.toml", "[symbols]\nimage_prefx = \"X\"\n");

    let result = env.run(&["list", "--names", "logo"]);
    assert!(result.success, "unknown keys must not be fatal");
    assert!(
        result.stderr.contains("unknown key 'image_prefx'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'image_prefix'"));
    assert!(result.stdout.contains("ACImageNameLogo"));
}

#[test]
fn invalid_toml_is_fatal() {
    let env = TestEnv::new();
    env.write("acsym.toml", "[symbols\n");

    let result = env.run(&["list", "--names", "logo"]);
    assert!(!result.success);
    assert!(result.stderr.contains("invalid configuration"));
    assert!(result.stderr.contains("acsym.toml"));
}

#[test]
fn repeated_variant_name_is_rejected() {
    let env = TestEnv::new();
    env.simplr_catalog();
    env.write(
        "acsym.toml",
        r#"
[catalog]
paths = ["Simplr/Assets.xcassets"]

[output]
dir = "build/{variant}"

[[variants]]
name = "Debug"
exclude = ["bcs-*"]

[[variants]]
name = "Debug"
"#,
    );

    let result = env.run(&["--json", "generate"]);
    assert!(!result.success);

    let events = result.events();
    assert!(events.iter().all(|e| e["event"] != "file"));
    let error = events.iter().find(|e| e["event"] == "error").unwrap();
    assert_eq!(error["code"], "DUPLICATE_VARIANT");
    assert!(error["message"].as_str().unwrap().contains("'Debug'"));
    assert!(!env.path("build").exists());
}

#[test]
fn variants_sharing_an_output_dir_are_rejected() {
    let env = TestEnv::new();
    env.simplr_catalog();
    env.write(
        "acsym.toml",
        r#"
[catalog]
paths = ["Simplr/Assets.xcassets"]

[output]
dir = "build/{variant}"

[[variants]]
name = "Debug"
exclude = ["bcs-*"]

[[variants]]
name = "Debug/"
"#,
    );

    let result = env.run(&["generate"]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("is written by both variant 'Debug' and variant 'Debug/'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(!env.path("build").exists());
}
