//! Default administrator record

use sqlx::sqlite::SqliteConnection;

use super::{DbError, MemberRepo};
use crate::models::NewMember;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin123";
const ADMIN_PHONE: &str = "0912345678";
const ADMIN_BIRTHDATE: &str = "1990-01-01";

/// Insert the administrator unless a member already holds its username or
/// email. Returns whether a row was inserted.
pub async fn seed_admin(conn: &mut SqliteConnection) -> Result<bool, DbError> {
    let mut repo = MemberRepo::new(conn);

    if repo
        .username_or_email_exists(ADMIN_USERNAME, ADMIN_EMAIL)
        .await?
    {
        return Ok(false);
    }

    repo.insert(&NewMember {
        username: ADMIN_USERNAME.to_owned(),
        email: ADMIN_EMAIL.to_owned(),
        password: ADMIN_PASSWORD.to_owned(),
        phone: ADMIN_PHONE.to_owned(),
        birthdate: ADMIN_BIRTHDATE.to_owned(),
    })
    .await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{initialize, Store};

    #[tokio::test]
    async fn seeds_admin_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("members.db")).unwrap();

        initialize(&store).await.unwrap();
        initialize(&store).await.unwrap();

        let mut conn = store.connect().await.unwrap();
        let mut repo = MemberRepo::new(&mut conn);
        assert_eq!(repo.count().await.unwrap(), 1);

        let admin = repo
            .find_by_credentials(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .unwrap()
            .expect("admin seeded");
        assert_eq!(admin.username, ADMIN_USERNAME);
        assert_eq!(admin.phone, ADMIN_PHONE);
        assert_eq!(admin.birthdate, ADMIN_BIRTHDATE);
    }

    #[tokio::test]
    async fn skips_seed_when_admin_email_is_taken() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("members.db")).unwrap();
        let mut conn = store.connect().await.unwrap();
        crate::db::migrations::run(&mut conn).await.unwrap();

        MemberRepo::new(&mut conn)
            .insert(&NewMember {
                username: "root".into(),
                email: ADMIN_EMAIL.into(),
                password: "secret".into(),
                phone: String::new(),
                birthdate: String::new(),
            })
            .await
            .unwrap();

        assert!(!seed_admin(&mut conn).await.unwrap());
        assert_eq!(MemberRepo::new(&mut conn).count().await.unwrap(), 1);
    }
}
