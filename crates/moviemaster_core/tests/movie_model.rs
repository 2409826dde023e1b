use moviemaster_core::{MovieInput, MovieInputError, MovieRecord, MovieView};
use serde_json::json;

#[test]
fn record_decodes_seed_shape() {
    let record: MovieRecord = serde_json::from_value(json!({
        "imdbId": "tt1375666",
        "Title": "Inception",
        "Year": "2010",
        "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
        "imdbRating": "8.8",
        "LastUpdated": "2021-05-01T10:20:30Z"
    }))
    .unwrap();

    assert_eq!(record.id, "tt1375666");
    assert_eq!(record.title, "Inception");
    assert_eq!(record.year, "2010");
    assert_eq!(record.actors, "Leonardo DiCaprio, Joseph Gordon-Levitt");
    assert_eq!(record.rating, "8.8");
    assert_eq!(record.last_updated.year(), 2021);
}

#[test]
fn record_accepts_upper_case_imdb_id_and_missing_fields() {
    let record: MovieRecord = serde_json::from_value(json!({
        "imdbID": "tt0000001",
        "Title": "Untitled",
        "Actors": null
    }))
    .unwrap();

    assert_eq!(record.id, "tt0000001");
    assert_eq!(record.year, "");
    assert_eq!(record.actors, "");
    assert_eq!(record.rating, "");
    assert_eq!(record.last_updated.unix_timestamp(), 0);
}

#[test]
fn record_accepts_offset_less_timestamps() {
    let record: MovieRecord = serde_json::from_value(json!({
        "imdbId": "1",
        "LastUpdated": "2020-01-02T03:04:05.6789"
    }))
    .unwrap();

    assert_eq!(record.last_updated.year(), 2020);
    assert_eq!(record.last_updated.hour(), 3);
}

#[test]
fn view_serializes_with_caller_facing_names() {
    let record = MovieRecord::with_id("1", "Encanto", "2013").with_rating("6.7");
    let view = MovieView {
        id: record.id.clone(),
        movie_title: record.title.clone(),
        year: record.year.clone(),
        actors: record.actors.clone(),
        rating: record.rating.clone(),
        last_updated: record.last_updated,
    };

    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["id"], "1");
    assert_eq!(value["movieTitle"], "Encanto");
    assert_eq!(value["year"], "2013");
    assert_eq!(value["Rating"], "6.7");
    assert!(value["lastUpdated"].as_str().unwrap().contains('T'));
    assert!(value.get("Title").is_none());
    assert!(value.get("MovieTitle").is_none());
    assert!(value.get("rating").is_none());

    let decoded: MovieView = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, view);
}

#[test]
fn input_decodes_request_body() {
    let input: MovieInput = serde_json::from_value(json!({
        "MovieTitle": "Espresso Dica",
        "Year": "2008",
        "Actors": "Shak",
        "ImdbRating": "7.4"
    }))
    .unwrap();

    assert_eq!(
        input,
        MovieInput::new("Espresso Dica", "2008", "Shak").with_rating("7.4")
    );
    assert!(input.validate().is_ok());
}

#[test]
fn input_accepts_camel_case_keys() {
    let input: MovieInput = serde_json::from_value(json!({
        "movieTitle": "Espresso Dica",
        "year": "2008",
        "actors": "Shak",
        "imdbRating": "7.4"
    }))
    .unwrap();

    assert_eq!(
        input,
        MovieInput::new("Espresso Dica", "2008", "Shak").with_rating("7.4")
    );
}

#[test]
fn input_validation_reports_first_missing_field() {
    let missing_title = MovieInput {
        title: None,
        ..MovieInput::new("x", "2008", "Shak")
    };
    assert_eq!(
        missing_title.validate(),
        Err(MovieInputError::MissingField("MovieTitle"))
    );

    let blank_year = MovieInput::new("Heat", "   ", "Pacino");
    assert_eq!(
        blank_year.validate(),
        Err(MovieInputError::MissingField("Year"))
    );

    let no_actors = MovieInput {
        actors: None,
        ..MovieInput::new("Heat", "1995", "x")
    };
    let err = no_actors.validate().unwrap_err();
    assert_eq!(err.to_string(), "Actors is required");
}

#[test]
fn rating_is_optional() {
    assert!(MovieInput::new("Heat", "1995", "Pacino").validate().is_ok());
}
