use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use crate::auth::jwt::models::claims::Claims;

pub fn decode_jwt(jwt: String, secret: &str) -> Result<Claims, ErrorKind> {
    let result = decode::<Claims>(
        &jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    );

    match result {
        Ok(data) => Ok(data.claims),
        Err(e) => Err(e.kind().to_owned()),
    }
}

#[cfg(test)]
pub fn sign_jwt(id: &str, secret: &str) -> Result<String, ErrorKind> {
    use jsonwebtoken::{encode, EncodingKey, Header};

    use crate::app::util::time;

    use super::config::JWT_EXP;

    let iat = time::current_time_in_secs();
    let exp = iat + JWT_EXP;

    let claims = Claims {
        id: id.to_string(),
        iat,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.kind().to_owned())
}
