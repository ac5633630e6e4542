#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway git repository with a linear history
pub struct TestRepo {
    pub repo: Repository,
    pub dir: TempDir,
    counter: usize,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }
        TestRepo {
            repo,
            dir,
            counter: 0,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit a change to README.md on HEAD
    pub fn commit(&mut self, message: &str) -> Oid {
        self.counter += 1;
        let content_path = self.dir.path().join("README.md");
        fs::write(&content_path, format!("revision {}\n", self.counter))
            .expect("Could not write file");

        let mut index = self.repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");
        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let sig = Signature::now("Test User", "test@example.com").expect("Could not get sig");
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    /// Commit `count` changes and return the last one
    pub fn commits(&mut self, count: usize) -> Oid {
        let mut last = None;
        for i in 0..count {
            last = Some(self.commit(&format!("change {}", i)));
        }
        last.expect("at least one commit")
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn tag_annotated(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        let sig = Signature::now("Test User", "test@example.com").expect("Could not get sig");
        self.repo
            .tag(name, &object, &sig, "release", false)
            .expect("Could not create annotated tag");
    }

    /// Point HEAD's branch back at `oid`, so later commits fork from there
    pub fn reset_to(&self, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .reset(&object, git2::ResetType::Hard, None)
            .expect("Could not reset");
    }

    pub fn head_short_id(&self) -> String {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Could not resolve HEAD");
        head.as_object()
            .short_id()
            .expect("Could not abbreviate id")
            .as_str()
            .expect("short id is utf-8")
            .to_string()
    }
}
