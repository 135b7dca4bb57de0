use diesel::prelude::*;

use crate::{
    domain::post::{NewPost, Post, PostStatus, UpdatePost},
    repository::{
        DieselRepository, PostListQuery, PostReader, PostWriter, errors::RepositoryResult,
    },
};

impl PostReader for DieselRepository {
    fn get_post_by_id(&self, id: i32) -> RepositoryResult<Option<Post>> {
        use crate::models::post::Post as DbPost;
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let post = posts::table.find(id).first::<DbPost>(&mut conn).optional()?;

        Ok(post.map(Into::into))
    }

    fn get_post_by_slug(&self, slug: &str) -> RepositoryResult<Option<Post>> {
        use crate::models::post::Post as DbPost;
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let post = posts::table
            .filter(posts::slug.eq(slug))
            .first::<DbPost>(&mut conn)
            .optional()?;

        Ok(post.map(Into::into))
    }

    fn list_posts(&self, query: PostListQuery) -> RepositoryResult<Vec<Post>> {
        use crate::models::post::Post as DbPost;
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let mut statement = posts::table.into_boxed();

        if let Some(status) = query.status {
            statement = statement.filter(posts::status.eq(status.to_string()));
        }

        let items = statement
            .order((posts::published_at.desc(), posts::id.desc()))
            .load::<DbPost>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post> {
        use crate::models::post::{NewPost as DbNewPost, Post as DbPost};
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let insertable: DbNewPost = new_post.into();
        let created = diesel::insert_into(posts::table)
            .values(&insertable)
            .get_result::<DbPost>(&mut conn)?;

        Ok(created.into())
    }

    fn update_post(&self, post_id: i32, updates: &UpdatePost) -> RepositoryResult<Post> {
        use crate::models::post::{Post as DbPost, UpdatePost as DbUpdatePost};
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let db_updates: DbUpdatePost = updates.into();

        let updated = diesel::update(posts::table.find(post_id))
            .set(&db_updates)
            .get_result::<DbPost>(&mut conn)?;

        Ok(updated.into())
    }

    fn update_post_status(&self, post_id: i32, status: PostStatus) -> RepositoryResult<Post> {
        use crate::models::post::Post as DbPost;
        use crate::schema::posts;

        let mut conn = self.conn()?;
        let updated = diesel::update(posts::table.find(post_id))
            .set((
                posts::status.eq(status.to_string()),
                posts::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<DbPost>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_post(&self, post_id: i32) -> RepositoryResult<()> {
        use crate::schema::posts;

        let mut conn = self.conn()?;
        diesel::delete(posts::table.find(post_id)).execute(&mut conn)?;
        Ok(())
    }
}
