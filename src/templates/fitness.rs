//! Fitness template: workout plans and progress tracking.

/// Feature labels shown to the user, in display order.
pub const FEATURES: &[&str] = &["Workout Plans", "Progress Tracking"];

/// Template sources keyed by relative path.
pub const FILES: &[(&str, &str)] = &[
    ("App.js", APP_JS),
    ("screens/HomeScreen.js", HOME_SCREEN_JS),
    ("screens/WorkoutsScreen.js", WORKOUTS_SCREEN_JS),
    ("screens/ProgressScreen.js", PROGRESS_SCREEN_JS),
    ("package.json", PACKAGE_JSON),
];

const APP_JS: &str = r#"import React from 'react';
import { NavigationContainer } from '@react-navigation/native';
import { createBottomTabNavigator } from '@react-navigation/bottom-tabs';
import HomeScreen from './screens/HomeScreen';
import WorkoutsScreen from './screens/WorkoutsScreen';
import ProgressScreen from './screens/ProgressScreen';

const Tab = createBottomTabNavigator();

export default function App() {
  return (
    <NavigationContainer>
      <Tab.Navigator>
        <Tab.Screen name="Home" component={HomeScreen} />
        <Tab.Screen name="Workouts" component={WorkoutsScreen} />
        <Tab.Screen name="Progress" component={ProgressScreen} />
      </Tab.Navigator>
    </NavigationContainer>
  );
}"#;

const HOME_SCREEN_JS: &str = r#"import React from 'react';
import { View, Text, StyleSheet } from 'react-native';

export default function HomeScreen() {
  return (
    <View style={styles.container}>
      <View style={styles.hero}>
        <Text style={styles.title}>BUSINESS_NAME</Text>
        <Text style={styles.subtitle}>Train hard, track progress</Text>
      </View>
      <Text style={styles.motivation}>Today is a great day for a workout!</Text>
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
  },
  hero: {
    padding: 24,
    backgroundColor: 'THEME_PRIMARY',
    alignItems: 'center',
  },
  title: {
    fontSize: 28,
    fontWeight: 'bold',
    color: 'white',
  },
  subtitle: {
    fontSize: 16,
    color: 'white',
    marginTop: 8,
  },
  motivation: {
    fontSize: 18,
    color: 'THEME_SECONDARY',
    textAlign: 'center',
    padding: 20,
  },
});"#;

const WORKOUTS_SCREEN_JS: &str = r#"import React from 'react';
import { View, Text, FlatList, StyleSheet } from 'react-native';

const workouts = [
  { id: 1, name: 'Full Body Blast', duration: '45 min', level: 'Intermediate' },
  { id: 2, name: 'Morning Yoga Flow', duration: '30 min', level: 'Beginner' },
  { id: 3, name: 'HIIT Cardio', duration: '20 min', level: 'Advanced' },
];

export default function WorkoutsScreen() {
  const renderWorkout = ({ item }) => (
    <View style={styles.card}>
      <Text style={styles.cardTitle}>{item.name}</Text>
      <Text style={styles.cardMeta}>{item.duration} · {item.level}</Text>
    </View>
  );

  return (
    <View style={styles.container}>
      <Text style={styles.title}>Workout Plans</Text>
      <FlatList
        data={workouts}
        renderItem={renderWorkout}
        keyExtractor={item => item.id.toString()}
      />
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
    padding: 16,
  },
  title: {
    fontSize: 24,
    fontWeight: 'bold',
    color: 'THEME_PRIMARY',
    marginBottom: 16,
  },
  card: {
    backgroundColor: 'white',
    padding: 16,
    marginBottom: 12,
    borderRadius: 8,
  },
  cardTitle: {
    fontSize: 18,
    fontWeight: '600',
    color: '#333',
  },
  cardMeta: {
    fontSize: 14,
    color: '#666',
    marginTop: 4,
  },
});"#;

const PROGRESS_SCREEN_JS: &str = r#"import React from 'react';
import { View, Text, StyleSheet } from 'react-native';

export default function ProgressScreen() {
  return (
    <View style={styles.container}>
      <Text style={styles.title}>Your Progress</Text>
      <View style={styles.statCard}>
        <Text style={styles.statValue}>12</Text>
        <Text style={styles.statLabel}>Workouts this month</Text>
      </View>
      <View style={styles.statCard}>
        <Text style={styles.statValue}>5h 20m</Text>
        <Text style={styles.statLabel}>Total training time</Text>
      </View>
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
    padding: 16,
  },
  title: {
    fontSize: 24,
    fontWeight: 'bold',
    color: 'THEME_PRIMARY',
    marginBottom: 16,
  },
  statCard: {
    backgroundColor: 'white',
    padding: 20,
    marginBottom: 12,
    borderRadius: 8,
    alignItems: 'center',
  },
  statValue: {
    fontSize: 32,
    fontWeight: 'bold',
    color: 'THEME_SECONDARY',
  },
  statLabel: {
    fontSize: 14,
    color: '#666',
    marginTop: 4,
  },
});"#;

const PACKAGE_JSON: &str = r#"{
  "name": "APP_IDENTIFIER",
  "version": "1.0.0",
  "main": "node_modules/expo/AppEntry.js",
  "scripts": {
    "start": "expo start",
    "android": "expo start --android",
    "ios": "expo start --ios",
    "web": "expo start --web"
  },
  "dependencies": {
    "expo": "~49.0.0",
    "react": "18.2.0",
    "react-native": "0.72.6",
    "@react-navigation/native": "^6.0.0",
    "@react-navigation/bottom-tabs": "^6.0.0",
    "react-native-screens": "~3.22.0",
    "react-native-safe-area-context": "4.6.3"
  },
  "devDependencies": {
    "@babel/core": "^7.20.0"
  }
}"#;
