/// Skeleton `settings.conf` written by `--write-default-config`.
pub const SETTINGS_SKELETON_CONTENT: &str = "# recent-picker settings\n\
#\n\
# Format: key = value\n\
# Lines starting with #, // or ; are comments.\n\
# Wrap a value in double quotes to keep leading/trailing spaces.\n\
#\n\
# Number of recently used files offered by the picker (the active file is\n\
# tracked in one extra slot and never offered).\n\
recent_length = 3\n\
#\n\
# Token placed between a workspace folder name and the relative file path,\n\
# e.g. \"proj • src/main.rs\". Must not occur in folder names.\n\
label_separator = \" • \"\n";
