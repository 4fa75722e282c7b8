// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, location_request, register_employer, register_job_seeker};
use chrono::NaiveDate;
use jobboard::application::dto::info_dto::{
    AddCompanyImageRequest, CompanyQuery, CreateResumeRequest, UpdateCompanyRequest,
    UpdateProfileRequest,
};
use jobboard::utils::errors::ServiceError;

#[tokio::test]
async fn test_update_company_renames_slug_and_moves_location() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Old Name").await;
    register_employer(&app, "rival@corp.com", "New Name").await;
    let info = &app.services.info;

    let before = info.get_own_company(employer.id).await.unwrap();
    assert_eq!(before.slug, "old-name");

    let mut location = location_request(&app.catalog);
    location.city = app.catalog.other_city_id;
    location.district = app.catalog.other_district_id;
    location.address = "99 Nguyễn Huệ".to_string();

    let updated = info
        .update_own_company(
            employer.id,
            UpdateCompanyRequest {
                company_name: Some("New Name".to_string()),
                employee_size: Some(120),
                location: Some(location),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.slug, "new-name-1");
    assert_eq!(updated.employee_size, 120);
    assert_eq!(updated.location_dict.id, before.location_dict.id);
    assert_eq!(updated.location_dict.city, app.catalog.other_city_id);
    assert_eq!(updated.location_dict.address, "99 Nguyễn Huệ");

    let public = info.get_public_company("new-name-1").await.unwrap();
    assert_eq!(public.id, before.id);
    assert!(matches!(
        info.get_public_company("old-name").await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_company_listing_and_images() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Image Works").await;
    register_employer(&app, "other@corp.com", "Different Labs").await;
    let info = &app.services.info;

    let all = info.find_companies(CompanyQuery::default()).await.unwrap();
    assert_eq!(all.count, 2);

    let filtered = info
        .find_companies(CompanyQuery {
            keyword: Some("Image".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(filtered.count, 1);
    assert_eq!(filtered.results[0].slug, "image-works");

    for keyword in ["%", "_"] {
        let wildcard = info
            .find_companies(CompanyQuery {
                keyword: Some(keyword.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(wildcard.count, 0);
    }

    let by_city = info
        .find_companies(CompanyQuery {
            city_id: Some(app.catalog.other_city_id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_city.count, 0);

    info.add_company_image(
        employer.id,
        AddCompanyImageRequest {
            image_url: "https://cdn.example.com/office.png".to_string(),
        },
    )
    .await
    .unwrap();
    let err = info
        .add_company_image(
            employer.id,
            AddCompanyImageRequest {
                image_url: "not a url".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let detail = info.get_public_company("image-works").await.unwrap();
    assert_eq!(detail.company_images.len(), 1);
    assert_eq!(
        detail.company_images[0].image_url,
        "https://cdn.example.com/office.png"
    );
}

#[tokio::test]
async fn test_job_seeker_profile_and_resumes() {
    let app = create_test_app().await;
    let (seeker, _) = register_job_seeker(&app, "seeker@x.com").await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Profile Co").await;
    let info = &app.services.info;

    let profile = info.get_profile(seeker.id).await.unwrap();
    assert_eq!(profile.email, "seeker@x.com");
    assert!(profile.phone.is_none());

    let updated = info
        .update_profile(
            seeker.id,
            UpdateProfileRequest {
                full_name: Some("Le Van C".to_string()),
                phone: Some("0909000111".to_string()),
                birthday: NaiveDate::from_ymd_opt(1995, 5, 20),
                city: Some(app.catalog.city_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.full_name, "Le Van C");
    assert_eq!(updated.phone.as_deref(), Some("0909000111"));
    assert_eq!(updated.city, Some(app.catalog.city_id));

    let err = info
        .update_profile(
            seeker.id,
            UpdateProfileRequest {
                city: Some(9999),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    assert!(matches!(
        info.get_profile(employer.id).await,
        Err(ServiceError::NotFound(_))
    ));

    for title in ["Backend CV", "Frontend CV"] {
        info.create_resume(
            seeker.id,
            CreateResumeRequest {
                title: title.to_string(),
                file_url: Some("https://cdn.example.com/cv.pdf".to_string()),
            },
        )
        .await
        .unwrap();
    }
    let resumes = info.find_resumes(seeker.id).await.unwrap();
    assert_eq!(resumes.len(), 2);
    assert!(info.find_resumes(employer.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_catalog_listing() {
    let app = create_test_app().await;
    let info = &app.services.info;

    assert_eq!(info.list_cities().await.unwrap().len(), 2);
    assert_eq!(info.list_careers().await.unwrap().len(), 1);

    let districts = info.list_districts(app.catalog.city_id).await.unwrap();
    assert_eq!(districts.len(), 1);
    assert_eq!(districts[0].id, app.catalog.district_id);

    assert!(matches!(
        info.list_districts(9999).await,
        Err(ServiceError::NotFound(_))
    ));
}
