use httpmock::prelude::*;
use pokedex_client::{
    FetchResult, PokeApiClient, PokemonRepository, PokemonRepositoryImpl, UNKNOWN_ERROR,
};
use tokio_test::assert_ok;

fn repository(server: &MockServer) -> PokemonRepositoryImpl<PokeApiClient> {
    PokemonRepositoryImpl::new(PokeApiClient::with_base_url(&server.base_url()))
}

fn list_body(count: u32, limit: u32, offset: u32) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (offset + 1..=offset + limit)
        .map(|n| {
            serde_json::json!({
                "name": format!("pokemon-{}", n),
                "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", n)
            })
        })
        .collect();

    serde_json::json!({
        "count": count,
        "next": format!("https://pokeapi.co/api/v2/pokemon?offset={}&limit={}", offset + limit, limit),
        "previous": null,
        "results": results
    })
}

fn ditto_body() -> serde_json::Value {
    serde_json::json!({
        "id": 132,
        "name": "ditto",
        "height": 3,
        "weight": 40,
        "base_experience": 101,
        "types": [
            {"slot": 1, "type": {"name": "normal", "url": "https://pokeapi.co/api/v2/type/1/"}}
        ],
        "stats": [
            {"base_stat": 48, "effort": 1, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
            {"base_stat": 48, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}},
            {"base_stat": 48, "effort": 0, "stat": {"name": "defense", "url": "https://pokeapi.co/api/v2/stat/3/"}},
            {"base_stat": 48, "effort": 0, "stat": {"name": "special-attack", "url": "https://pokeapi.co/api/v2/stat/4/"}},
            {"base_stat": 48, "effort": 0, "stat": {"name": "special-defense", "url": "https://pokeapi.co/api/v2/stat/5/"}},
            {"base_stat": 48, "effort": 0, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
        ],
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/132.png",
            "back_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/132.png"
        }
    })
}

#[tokio::test]
async fn test_get_list_first_page() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/pokemon")
            .query_param("limit", "20")
            .query_param("offset", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(list_body(1302, 20, 0));
    });

    let result = repository(&server).get_list(20, 0).await;

    api_mock.assert();
    let page = result.data().expect("expected success");
    assert_eq!(page.results.len(), 20);
    assert_eq!(page.count, 1302);
    assert!(page.previous.is_none());
    assert!(result.message().is_none());

    let entries = assert_ok!(page.entries());
    assert_eq!(entries.first().map(|e| e.number), Some(1));
    assert_eq!(entries.last().map(|e| e.number), Some(20));
}

#[tokio::test]
async fn test_get_list_result_count_matches_payload() {
    let server = MockServer::start();
    for (limit, offset) in [(0u32, 0u32), (1, 0), (7, 150)] {
        let mut mock = server.mock(|when, then| {
            when.method(GET)
                .path("/pokemon")
                .query_param("limit", limit.to_string().as_str())
                .query_param("offset", offset.to_string().as_str());
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(list_body(1302, limit, offset));
        });

        let result = repository(&server).get_list(limit, offset).await;

        mock.assert();
        assert_eq!(result.data().map(|p| p.results.len()), Some(limit as usize));
        mock.delete();
    }
}

#[tokio::test]
async fn test_get_detail_ditto() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/pokemon/ditto");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ditto_body());
    });

    let result = repository(&server).get_detail("ditto").await;

    api_mock.assert();
    let detail = result.data().expect("expected success");
    assert_eq!(detail.name, "ditto");
    assert_eq!(detail.stats.len(), 6);
    assert_eq!(detail.max_base_stat(), Some(48));
    assert!(detail.sprite_url.as_deref().unwrap().ends_with("/132.png"));
}

#[tokio::test]
async fn test_get_detail_not_found() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/pokemon/doesnotexist");
        then.status(404).body("Not Found");
    });

    let result = repository(&server).get_detail("doesnotexist").await;

    api_mock.assert();
    assert_eq!(result, FetchResult::error(UNKNOWN_ERROR));
    assert!(result.data().is_none());
}

#[tokio::test]
async fn test_failures_collapse_to_unknown_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pokemon");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/pokemon/broken");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"name": "broken", "height": "tall"}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/pokemon/empty");
        then.status(200).body("");
    });

    let repo = repository(&server);

    let list = repo.get_list(20, 0).await;
    assert_eq!(list.message(), Some(UNKNOWN_ERROR));
    assert!(list.data().is_none());

    for name in ["broken", "empty", "   "] {
        let detail = repo.get_detail(name).await;
        assert_eq!(detail.message(), Some(UNKNOWN_ERROR), "name: {:?}", name);
        assert!(detail.data().is_none());
    }
}

#[tokio::test]
async fn test_unreachable_host_is_unknown_error() {
    let repo = PokemonRepositoryImpl::new(PokeApiClient::with_base_url("http://127.0.0.1:9"));

    let result = repo.get_detail("ditto").await;
    assert_eq!(result, FetchResult::error(UNKNOWN_ERROR));
}

#[tokio::test]
async fn test_repeated_calls_return_identical_results() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/pokemon/ditto");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ditto_body());
    });

    let repo = repository(&server);
    let first = repo.get_detail("ditto").await;
    let second = repo.get_detail("ditto").await;

    api_mock.assert_hits(2);
    assert_eq!(first, second);
}
