//! Demo seed data.
//!
//! Seeding is explicit: the store constructor never inserts anything, so
//! tests start empty. The server calls [`sample_jobs`] at startup when
//! `demo.seed_sample_jobs` is enabled.

use hirehub_entity::job::{CreateJob, Job};

use crate::MemStore;

/// Insert the two sample job listings and return them.
pub fn sample_jobs(store: &MemStore) -> Vec<Job> {
    let listings = [
        CreateJob {
            title: "Entry Level Java Developer".into(),
            company: "Tech Corp".into(),
            location: "San Francisco, CA".into(),
            job_type: "Full-time".into(),
            description: "Join our team as an entry-level Java developer. You'll work on \
                          building scalable applications using Spring Boot and modern Java \
                          frameworks."
                .into(),
            requirements: vec![
                "Java".into(),
                "Spring Boot".into(),
                "SQL".into(),
                "Git".into(),
            ],
            salary: Some("$70,000 - $90,000".into()),
            experience_level: "Entry Level".into(),
        },
        CreateJob {
            title: "Entry Level Android Developer".into(),
            company: "Mobile Solutions Inc".into(),
            location: "New York, NY".into(),
            job_type: "Full-time".into(),
            description: "Seeking passionate Android developer to build innovative mobile \
                          applications for millions of users."
                .into(),
            requirements: vec![
                "Kotlin".into(),
                "Android SDK".into(),
                "Git".into(),
                "RESTful APIs".into(),
            ],
            salary: Some("$75,000 - $95,000".into()),
            experience_level: "Entry Level".into(),
        },
    ];

    listings
        .into_iter()
        .map(|listing| store.create_job(listing))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_two_listings_into_an_empty_store() {
        let store = MemStore::new();
        let seeded = sample_jobs(&store);

        assert_eq!(seeded.len(), 2);
        assert_eq!(store.jobs().len(), 2);
        assert!(seeded.iter().all(|j| j.salary.is_some()));
    }
}
