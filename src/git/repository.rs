use crate::domain::{NearestVersion, TagPattern, VersionExt};
use crate::error::{ReckonError, Result};
use git2::{Oid, Repository as Git2Repo};
use semver::Version;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    tag_pattern: TagPattern,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P, tag_pattern: TagPattern) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo, tag_pattern })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo, tag_pattern: TagPattern) -> Self {
        Git2Repository { repo, tag_pattern }
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self
            .repo
            .head()
            .map_err(|e| ReckonError::collaborator(format!("Cannot resolve HEAD: {}", e)))?;
        let commit = head.peel_to_commit()?;
        Ok(commit.id())
    }

    /// Map every commit carrying a version tag to the versions tagged on it.
    /// Handles both lightweight and annotated tags.
    fn tagged_versions(&self) -> Result<HashMap<Oid, Vec<Version>>> {
        let mut tagged: HashMap<Oid, Vec<Version>> = HashMap::new();
        let tags = self.repo.tag_names(None)?;

        for tag_name in tags.iter().flatten() {
            let Some(version) = self.tag_pattern.parse(tag_name) else {
                debug!(
                    tag = tag_name,
                    pattern = self.tag_pattern.as_str(),
                    "skipping non-version tag"
                );
                continue;
            };

            let reference = self.repo.find_reference(&format!("refs/tags/{}", tag_name))?;
            match reference.peel(git2::ObjectType::Commit) {
                Ok(commit) => tagged.entry(commit.id()).or_default().push(version),
                Err(e) => {
                    debug!(tag = tag_name, error = %e, "skipping tag not pointing at a commit")
                }
            }
        }

        Ok(tagged)
    }

    /// Count commits reachable from `head` but not from `since`
    fn count_commits(&self, head: Oid, since: Option<Oid>) -> Result<u64> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;
        if let Some(since) = since {
            revwalk.hide(since)?;
        }

        let mut count = 0;
        for oid in revwalk {
            oid?;
            count += 1;
        }
        Ok(count)
    }

    /// Distance from `head` to every tagged commit on its history.
    ///
    /// Commits not reachable from `head` are left out.
    fn reachable_distances(
        &self,
        head: Oid,
        tagged: &HashMap<Oid, Vec<Version>>,
    ) -> Result<HashMap<Oid, u64>> {
        let mut distances = HashMap::new();
        for oid in tagged.keys() {
            if *oid != head && !self.repo.graph_descendant_of(head, *oid)? {
                continue;
            }
            distances.insert(*oid, self.count_commits(head, Some(*oid))?);
        }
        Ok(distances)
    }
}

/// Find the selected version nearest to HEAD, with its distance.
///
/// Ties on distance resolve to the highest version.
fn nearest<F>(
    tagged: &HashMap<Oid, Vec<Version>>,
    distances: &HashMap<Oid, u64>,
    select: F,
) -> Option<(Version, u64)>
where
    F: Fn(&Version) -> bool,
{
    distances
        .iter()
        .filter_map(|(oid, &distance)| {
            let version = tagged.get(oid)?.iter().filter(|&v| select(v)).max()?;
            Some((version, distance))
        })
        .min_by(|(a_version, a_distance), (b_version, b_distance)| {
            a_distance
                .cmp(b_distance)
                .then_with(|| b_version.cmp(a_version))
        })
        .map(|(version, distance)| (version.clone(), distance))
}

impl super::Repository for Git2Repository {
    fn locate_nearest_version(&self) -> Result<NearestVersion> {
        let head = self.head_oid()?;
        let tagged = self.tagged_versions()?;
        let distances = self.reachable_distances(head, &tagged)?;

        let normal = nearest(&tagged, &distances, |v| v.is_normal());
        let any = nearest(&tagged, &distances, |_| true);

        let nearest = match (normal, any) {
            (None, None) => NearestVersion::untagged(self.count_commits(head, None)?),
            (normal, any) => {
                let (normal, distance_from_normal) = match normal {
                    Some(found) => found,
                    None => (Version::new(0, 0, 0), self.count_commits(head, None)?),
                };
                let (any, distance_from_any) =
                    any.unwrap_or_else(|| (normal.clone(), distance_from_normal));
                NearestVersion::new(normal, any, distance_from_normal, distance_from_any)
            }
        };

        debug!(%nearest, "located nearest versions");
        Ok(nearest)
    }

    fn head_short_id(&self) -> Result<String> {
        let head = self.repo.find_commit(self.head_oid()?)?;
        let short_id = head.as_object().short_id()?;

        short_id
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ReckonError::collaborator("HEAD short id is not valid UTF-8"))
    }
}
