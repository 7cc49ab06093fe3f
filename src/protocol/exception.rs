use serde::Deserialize;

/// Error envelope carried by non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct RemoteExceptionEnvelope {
    #[serde(rename = "RemoteException")]
    pub remote_exception: RemoteException,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteException {
    pub message: String,
    #[serde(default)]
    pub exception: Option<String>,
    #[serde(rename = "javaClassName", default)]
    pub java_class_name: Option<String>,
}
