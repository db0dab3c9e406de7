use serde_json::{
  Value,
  json
};

use crate::content::Profile;

/// schema.org `Person` document for the
/// profile, rendered as JSON-LD.
pub fn person_schema(
  profile: &Profile
) -> Value {
  let same_as: Vec<&str> = [
    profile.socials.github.as_deref(),
    profile.socials.linkedin.as_deref(),
    profile.socials.instagram.as_deref()
  ]
  .into_iter()
  .flatten()
  .map(str::trim)
  .filter(|url| !url.is_empty())
  .collect();

  let mut schema = json!({
    "@context": "https://schema.org",
    "@type": "Person",
    "name": profile.name,
    "jobTitle": profile.title,
    "email": profile.email,
    "sameAs": same_as,
  });

  if let Some(address) =
    profile.address.as_ref()
  {
    schema["address"] = json!({
      "@type": "PostalAddress",
      "addressLocality": address.locality,
      "addressRegion": address.region,
      "addressCountry": address.country,
    });
  }

  schema
}

#[cfg(test)]
mod tests {
  use super::person_schema;
  use crate::content::Portfolio;

  #[test]
  fn embedded_profile_schema() {
    let portfolio =
      Portfolio::embedded().unwrap();
    let schema =
      person_schema(&portfolio.profile);

    assert_eq!(schema["@type"], "Person");
    assert_eq!(schema["name"], "Amir Karki");
    assert_eq!(
      schema["address"]["addressLocality"],
      "Vancouver"
    );
    assert_eq!(
      schema["sameAs"][0],
      "https://github.com/Amir-karki"
    );
    assert_eq!(
      schema["sameAs"]
        .as_array()
        .unwrap()
        .len(),
      3
    );
  }

  #[test]
  fn address_and_socials_are_optional() {
    let portfolio =
      Portfolio::from_toml_str(
        "[profile]\n\
         name = \"Ada\"\n\
         title = \"Analyst\"\n\
         email = \"ada@example.com\"\n\
         [profile.socials]\n\
         github = \"  \"\n"
      )
      .unwrap();
    let schema =
      person_schema(&portfolio.profile);

    assert!(schema.get("address").is_none());
    assert_eq!(
      schema["sameAs"],
      serde_json::json!([])
    );
  }
}
