use statewatch_core::key_path::KeyPath;
use statewatch_core::policy::IgnorePolicy;

fn owned(policy: &IgnorePolicy, key: &str) -> bool {
    policy.is_cluster_owned(&KeyPath::parse(key))
}

#[test]
fn plain_cluster_key_is_cluster_owned() {
    let policy = IgnorePolicy::default();
    assert!(owned(&policy, "aws-accounts/cloud-platform/live-1/terraform.tfstate"));
}

#[test]
fn ignored_prefix_excludes_regardless_of_cluster_segment() {
    let policy = IgnorePolicy::default();
    assert!(!owned(
        &policy,
        "cloud-platform-environments/live-1/terraform.tfstate"
    ));
    assert!(!owned(&policy, "global-resources/foo/bar/terraform.tfstate"));
    assert!(!owned(&policy, "concourse-pipelines/main/terraform.tfstate"));
}

#[test]
fn ignored_parent_dir_excludes() {
    let policy = IgnorePolicy::default();
    assert!(!owned(&policy, "a/b/account/terraform.tfstate"));
}

#[test]
fn bare_root_state_file_is_excluded() {
    // A key with a single segment has no owning directory; the bare
    // `terraform.tfstate` also sits in the default prefix list.
    let policy = IgnorePolicy::default();
    assert!(!owned(&policy, "terraform.tfstate"));
}

#[test]
fn matching_is_per_segment_not_substring() {
    let policy = IgnorePolicy::default();
    assert!(owned(&policy, "global-resources-prod/live-1/terraform.tfstate"));
    assert!(owned(&policy, "a/b/account-services/terraform.tfstate"));
}

#[test]
fn matching_is_case_sensitive() {
    let policy = IgnorePolicy::default();
    assert!(owned(&policy, "Global-Resources/live-1/terraform.tfstate"));
    assert!(owned(&policy, "a/b/Account/terraform.tfstate"));
}

#[test]
fn custom_lists_replace_the_defaults() {
    let policy = IgnorePolicy::new(
        vec!["legacy".to_string()],
        vec!["shared".to_string()],
    );
    assert!(!owned(&policy, "legacy/live-1/terraform.tfstate"));
    assert!(!owned(&policy, "a/b/shared/terraform.tfstate"));
    // Default entries no longer apply once replaced.
    assert!(owned(&policy, "cloud-platform-environments/live-1/terraform.tfstate"));
}

#[test]
fn too_short_keys_are_never_cluster_owned() {
    let policy = IgnorePolicy::new(Vec::new(), Vec::new());
    assert!(!owned(&policy, "terraform.tfstate"));
    assert!(!owned(&policy, ""));
}
