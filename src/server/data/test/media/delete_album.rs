use super::*;

/// Tests that deleting an album removes its photos and their comments.
///
/// Two photos carrying three comments in total; afterwards none of the child
/// rows may remain.
///
/// Expected: Ok with zero photos and zero comments left
#[tokio::test]
async fn delete_album_removes_photos_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_media_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;
    let album = factory::media::create_album(db, event.id, user.id).await?;

    let photo_one = factory::media::create_photo(db, album.id, user.id).await?;
    let photo_two = factory::media::create_photo(db, album.id, user.id).await?;
    factory::media::create_comment(db, photo_one.id, user.id).await?;
    factory::media::create_comment(db, photo_one.id, user.id).await?;
    factory::media::create_comment(db, photo_two.id, user.id).await?;

    let repo = MediaRepository::new(db);
    repo.delete_album(album.id).await?;

    assert!(repo.find_album(album.id).await?.is_none());
    assert!(repo.find_photo(photo_one.id).await?.is_none());
    assert!(repo.find_photo(photo_two.id).await?.is_none());

    let photos = entity::prelude::Photo::find().count(db).await?;
    let comments = entity::prelude::PhotoComment::find().count(db).await?;
    assert_eq!(photos, 0);
    assert_eq!(comments, 0);

    Ok(())
}

/// Tests that deleting one album leaves a sibling album untouched.
///
/// Expected: Ok with the other album and its photo still present
#[tokio::test]
async fn delete_album_leaves_siblings_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_media_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = create_event_with_organizer(db).await?;
    let doomed = factory::media::create_album(db, event.id, user.id).await?;
    let kept = factory::media::create_album(db, event.id, user.id).await?;
    factory::media::create_photo(db, doomed.id, user.id).await?;
    let kept_photo = factory::media::create_photo(db, kept.id, user.id).await?;

    let repo = MediaRepository::new(db);
    repo.delete_album(doomed.id).await?;

    assert!(repo.find_album(kept.id).await?.is_some());
    assert!(repo.find_photo(kept_photo.id).await?.is_some());

    Ok(())
}
