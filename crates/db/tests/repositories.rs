//! Repository integration tests against a live Postgres instance.
//!
//! Each test gets a fresh database with migrations applied via
//! `#[sqlx::test]`.

use labtrack_core::pagination::PageParams;
use labtrack_db::models::log::{CreateLog, LogFilter};
use labtrack_db::models::member::{AddMember, UpdateMember};
use labtrack_db::models::project::{
    CreateProject, CreateProjectMember, ProjectFilter, UpdateProject,
};
use labtrack_db::models::sample::CreateSample;
use labtrack_db::models::user::CreateUser;
use labtrack_db::repositories::{LogRepo, MemberRepo, ProjectRepo, SampleRepo, UserRepo};
use labtrack_db::DbPool;

async fn seed_user(pool: &DbPool, username: &str, role: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@lab.test"),
            // Not a real hash; these tests never verify passwords.
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$AAAA".to_string(),
            role: role.to_string(),
            department: Some("acoustics".to_string()),
        },
    )
    .await
    .expect("seed user");
    user.id
}

fn project_input(title: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: None,
        status: Some("active".to_string()),
        start_date: Some("2026-01-15".parse().unwrap()),
        end_date: None,
        budget: Some(25_000.0),
        confidentiality_level: Some("internal".to_string()),
        team_members: Vec::new(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_with_members_persists_project_and_members(pool: DbPool) {
    let lead = seed_user(&pool, "lead", "researcher").await;
    let assistant = seed_user(&pool, "assistant", "viewer").await;

    let mut input = project_input("Reverberation study");
    input.team_members = vec![CreateProjectMember {
        user_id: assistant,
        role: "assistant".to_string(),
        contribution_percentage: 40.0,
    }];

    let project = ProjectRepo::create_with_members(&pool, lead, &input)
        .await
        .expect("create project");
    assert_eq!(project.title, "Reverberation study");
    assert_eq!(project.lead_researcher_id, lead);

    let members = MemberRepo::list_by_project(&pool, project.id)
        .await
        .expect("list members");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, assistant);
    assert_eq!(members[0].username, "assistant");
}

#[sqlx::test(migrations = "./migrations")]
async fn failed_member_insert_rolls_back_the_project(pool: DbPool) {
    let lead = seed_user(&pool, "lead", "researcher").await;
    let assistant = seed_user(&pool, "assistant", "viewer").await;

    // The same user twice trips the unique (project, user) constraint on
    // the second insert, after the project row already exists in the tx.
    let mut input = project_input("Doomed project");
    input.team_members = vec![
        CreateProjectMember {
            user_id: assistant,
            role: "assistant".to_string(),
            contribution_percentage: 30.0,
        },
        CreateProjectMember {
            user_id: assistant,
            role: "analyst".to_string(),
            contribution_percentage: 20.0,
        },
    ];

    let result = ProjectRepo::create_with_members(&pool, lead, &input).await;
    assert!(result.is_err());

    let total = ProjectRepo::count(&pool, &ProjectFilter::default())
        .await
        .expect("count");
    assert_eq!(total, 0, "project row must roll back with the member insert");
}

#[sqlx::test(migrations = "./migrations")]
async fn list_page_and_count_respect_the_same_filters(pool: DbPool) {
    let lead = seed_user(&pool, "lead", "researcher").await;

    for i in 0..3 {
        let mut input = project_input(&format!("active-{i}"));
        input.status = Some("active".to_string());
        ProjectRepo::create_with_members(&pool, lead, &input)
            .await
            .expect("create");
    }
    let mut done = project_input("done");
    done.status = Some("completed".to_string());
    ProjectRepo::create_with_members(&pool, lead, &done)
        .await
        .expect("create");

    let filter = ProjectFilter {
        status: Some("active".to_string()),
        confidentiality: None,
    };
    let page = ProjectRepo::list_page(&pool, &filter, PageParams { page: 1, limit: 2 })
        .await
        .expect("page");
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|p| p.status == "active"));

    let total = ProjectRepo::count(&pool, &filter).await.expect("count");
    assert_eq!(total, 3, "count covers the whole filtered set, not the page");

    let page2 = ProjectRepo::list_page(&pool, &filter, PageParams { page: 2, limit: 2 })
        .await
        .expect("page 2");
    assert_eq!(page2.len(), 1);

    let mut seen: Vec<i64> = page.iter().chain(page2.iter()).map(|p| p.id).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 3, "pages partition the filtered set");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_applies_only_provided_fields(pool: DbPool) {
    let lead = seed_user(&pool, "lead", "researcher").await;
    let project = ProjectRepo::create_with_members(&pool, lead, &project_input("Original"))
        .await
        .expect("create");

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            title: None,
            description: Some("now with notes".to_string()),
            status: Some("completed".to_string()),
            start_date: None,
            end_date: None,
            budget: None,
            confidentiality_level: None,
        },
    )
    .await
    .expect("update")
    .expect("row exists");

    assert_eq!(updated.title, "Original");
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.description.as_deref(), Some("now with notes"));
    assert_eq!(updated.budget, project.budget);

    let missing = ProjectRepo::update(&pool, 9999, &UpdateProject::default())
        .await
        .expect("update missing");
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn member_update_returns_none_for_missing_pair(pool: DbPool) {
    let lead = seed_user(&pool, "lead", "researcher").await;
    let other = seed_user(&pool, "other", "viewer").await;
    let project = ProjectRepo::create_with_members(&pool, lead, &project_input("P"))
        .await
        .expect("create");

    let input = UpdateMember {
        role: Some("analyst".to_string()),
        contribution_percentage: None,
    };
    let missing = MemberRepo::update(&pool, project.id, other, &input)
        .await
        .expect("update");
    assert!(missing.is_none());

    MemberRepo::add(
        &pool,
        project.id,
        &AddMember {
            user_id: other,
            role: "assistant".to_string(),
            contribution_percentage: 10.0,
        },
    )
    .await
    .expect("add member");

    let updated = MemberRepo::update(&pool, project.id, other, &input)
        .await
        .expect("update")
        .expect("membership exists");
    assert_eq!(updated.role, "analyst");
    assert_eq!(updated.contribution_percentage, 10.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_member_pair_is_rejected(pool: DbPool) {
    let lead = seed_user(&pool, "lead", "researcher").await;
    let other = seed_user(&pool, "other", "viewer").await;
    let project = ProjectRepo::create_with_members(&pool, lead, &project_input("P"))
        .await
        .expect("create");

    let input = AddMember {
        user_id: other,
        role: "assistant".to_string(),
        contribution_percentage: 10.0,
    };
    MemberRepo::add(&pool, project.id, &input).await.expect("first add");

    let err = MemberRepo::add(&pool, project.id, &input)
        .await
        .expect_err("second add must fail");
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "./migrations")]
async fn sample_delete_is_scoped_to_its_project(pool: DbPool) {
    let lead = seed_user(&pool, "lead", "researcher").await;
    let p1 = ProjectRepo::create_with_members(&pool, lead, &project_input("P1"))
        .await
        .expect("create");
    let p2 = ProjectRepo::create_with_members(&pool, lead, &project_input("P2"))
        .await
        .expect("create");

    let sample = SampleRepo::create(
        &pool,
        &CreateSample {
            project_id: p1.id,
            sample_name: "room-a-sweep".to_string(),
            file_path: "/data/room-a-sweep.wav".to_string(),
            duration_seconds: Some(12.5),
            format: Some("wav".to_string()),
            sampling_rate: Some(48_000),
            channel_count: Some(2),
            notes: None,
            uploaded_by: lead,
        },
    )
    .await
    .expect("create sample");

    // Wrong project: treated as missing.
    assert!(!SampleRepo::delete(&pool, p2.id, sample.id).await.expect("delete"));
    assert!(SampleRepo::delete(&pool, p1.id, sample.id).await.expect("delete"));
    assert!(!SampleRepo::delete(&pool, p1.id, sample.id).await.expect("redelete"));

    let remaining = SampleRepo::list_by_project(&pool, p1.id)
        .await
        .expect("list");
    assert!(remaining.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn log_summary_covers_the_filtered_set_not_the_page(pool: DbPool) {
    let lead = seed_user(&pool, "lead", "researcher").await;
    let project = ProjectRepo::create_with_members(&pool, lead, &project_input("P"))
        .await
        .expect("create");

    let entries = [
        ("experiment", 2.0, "2026-02-01"),
        ("experiment", 3.0, "2026-02-02"),
        ("analysis", 1.5, "2026-02-03"),
        ("experiment", 4.0, "2026-03-01"),
    ];
    for (activity, hours, date) in entries {
        LogRepo::create(
            &pool,
            &CreateLog {
                project_id: project.id,
                user_id: lead,
                activity_type: activity.to_string(),
                hours_spent: hours,
                log_date: date.parse().unwrap(),
                notes: None,
            },
        )
        .await
        .expect("create log");
    }

    // February only.
    let filter = LogFilter {
        start_date: Some("2026-02-01".parse().unwrap()),
        end_date: Some("2026-02-28".parse().unwrap()),
        activity_type: None,
        user_id: None,
    };

    let page = LogRepo::list_page(&pool, project.id, &filter, PageParams { page: 1, limit: 2 })
        .await
        .expect("page");
    assert_eq!(page.len(), 2);
    // Newest log_date first.
    assert!(page[0].log_date >= page[1].log_date);

    let total = LogRepo::count(&pool, project.id, &filter).await.expect("count");
    assert_eq!(total, 3);

    let summary = LogRepo::activity_summary(&pool, project.id, &filter)
        .await
        .expect("summary");
    assert_eq!(summary.len(), 2);
    let experiment = summary
        .iter()
        .find(|s| s.activity_type == "experiment")
        .expect("experiment bucket");
    assert_eq!(experiment.type_hours, 5.0);
    let analysis = summary
        .iter()
        .find(|s| s.activity_type == "analysis")
        .expect("analysis bucket");
    assert_eq!(analysis.type_hours, 1.5);
}
