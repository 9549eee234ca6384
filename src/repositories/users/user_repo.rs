//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 사용하는 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **유니크 인덱스**: `email_unique` 인덱스가 이메일 중복의 최종 판정 기준
//! - **중복 키 변환**: 드라이버의 11000 에러를 `ConflictError`로 변환
//! - **저장소 타임스탬프**: `created_at`, `updated_at`은 저장 시점에 기록

use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    db::Database,
    domain::entities::users::User,
};
use super::{UserStore, EMAIL_ALREADY_EXISTS};

const COLLECTION_NAME: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `email_unique`: email(asc), UNIQUE
/// - `created_at_desc`: created_at(desc)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database);
/// repo.create_indexes().await?;
///
/// let saved = repo.save(User::new(email, password, first_name, last_name)).await?;
/// let found = repo.find_by_id(&saved.id_string().unwrap()).await?;
/// ```
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 같은 정의의 인덱스가 있으면
    /// MongoDB가 그대로 유지합니다.
    ///
    /// # 주의사항
    ///
    /// 컬렉션에 이미 중복 이메일이 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let now = DateTime::now();
        user.created_at = now;
        user.updated_at = now;

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!("예상하지 못한 inserted_id: {}", result.inserted_id))
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn upsert(&self, id: ObjectId, mut user: User) -> AppResult<User> {
        let now = DateTime::now();
        user.updated_at = now;

        let mut fields = mongodb::bson::to_document(&user)
            .context("사용자 문서 직렬화 실패")?;
        fields.remove("_id");
        fields.remove("created_at");

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": id },
                doc! {
                    "$set": fields,
                    "$setOnInsert": { "created_at": now },
                },
            )
            .with_options(options)
            .await
            .map_err(map_write_error)?
            .ok_or_else(|| AppError::DatabaseError(format!("upsert 결과가 없습니다: {}", id)))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = match ObjectId::parse_str(id) {
            Ok(object_id) => object_id,
            Err(_) => {
                debug!("ObjectId 형식이 아닌 사용자 ID 조회: {}", id);
                return Ok(None);
            }
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self.collection()
            .count_documents(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        match user.id {
            Some(id) => self.upsert(id, user).await,
            None => self.insert(user).await,
        }
    }
}

/// 쓰기 에러 변환: 중복 키는 `ConflictError`, 나머지는 `DatabaseError`
fn map_write_error(error: MongoError) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError(EMAIL_ALREADY_EXISTS.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(ref command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::{
        bson,
        error::{CommandError, WriteError},
    };

    fn write_error(code: i32) -> MongoError {
        let write_error: WriteError = bson::from_document(doc! {
            "code": code,
            "codeName": "DuplicateKey",
            "errmsg": "E11000 duplicate key error collection: users index: email_unique",
        })
        .unwrap();

        ErrorKind::Write(WriteFailure::WriteError(write_error)).into()
    }

    fn command_error(code: i32) -> MongoError {
        let command_error: CommandError = bson::from_document(doc! {
            "code": code,
            "codeName": "DuplicateKey",
            "errmsg": "E11000 duplicate key error collection: users index: email_unique",
        })
        .unwrap();

        ErrorKind::Command(command_error).into()
    }

    #[test]
    fn test_duplicate_key_write_error_is_conflict() {
        let mapped = map_write_error(write_error(DUPLICATE_KEY_CODE));

        assert!(matches!(mapped, AppError::ConflictError(ref msg) if msg == EMAIL_ALREADY_EXISTS));
    }

    #[test]
    fn test_duplicate_key_command_error_is_conflict() {
        let mapped = map_write_error(command_error(DUPLICATE_KEY_CODE));

        assert!(matches!(mapped, AppError::ConflictError(ref msg) if msg == EMAIL_ALREADY_EXISTS));
    }

    #[test]
    fn test_other_write_errors_are_database_errors() {
        assert!(matches!(map_write_error(write_error(121)), AppError::DatabaseError(_)));
        assert!(matches!(map_write_error(command_error(50)), AppError::DatabaseError(_)));
    }
}
