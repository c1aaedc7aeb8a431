use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CidadeParams {
    #[serde(default)]
    pub cidade: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NomeParams {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub sobrenome: String,
}

#[cfg(test)]
mod test {
    use super::*;

    // An absent query parameter reads as the empty string.
    #[test]
    fn absent_parameters_default_to_empty() {
        let params: NomeParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.nome, "");
        assert_eq!(params.sobrenome, "");

        let params: CidadeParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.cidade, "");
    }
}
