pub mod operations;

pub const SIMPLE_QUERY: &str = r#"
query HeroName {
  hero {
    name
  }
}
"#;

pub const COMPLEX_QUERY: &str = r#"
query HeroComparison($first: Int = 3, $episode: Episode = JEDI) @cached(ttl: 60) {
  leftComparison: hero(episode: $episode) {
    ...comparisonFields
  }
  rightComparison: hero(episode: EMPIRE) {
    ...comparisonFields
  }
}

mutation CreateReview($ep: Episode!, $review: ReviewInput!) {
  createReview(episode: $ep, review: $review) {
    stars
    commentary
  }
}

fragment comparisonFields on Character {
  name
  friendsConnection(first: $first, filter: { tags: ["a", "b"], minStars: 4.5, active: true }) {
    totalCount
    edges {
      node {
        name
        ... on Droid @include(if: true) {
          primaryFunction
        }
        ... {
          id
        }
      }
    }
  }
}
"#;
